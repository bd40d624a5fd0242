#![forbid(unsafe_code)]

use crate::common::{validate_text, ContractViolation, Validate};
use serde::{Deserialize, Serialize};

/// Canonical service family. `id` is the only equality key; `name` and
/// `icon` are display metadata and may vary without breaking identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceType {
    pub id: String,
    pub name: String,
    pub icon: String,
}

impl ServiceType {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
        }
    }

    pub fn same_case(&self, other: &ServiceType) -> bool {
        self.id == other.id
    }
}

impl Validate for ServiceType {
    fn validate(&self) -> Result<(), ContractViolation> {
        validate_text("service_type.id", &self.id, 64)?;
        validate_text("service_type.name", &self.name, 128)?;
        validate_text("service_type.icon", &self.icon, 64)?;
        Ok(())
    }
}
