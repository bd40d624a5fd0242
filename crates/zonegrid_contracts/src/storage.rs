#![forbid(unsafe_code)]

use crate::common::{validate_text, ContractViolation, Validate};
use serde::{Deserialize, Serialize};

/// Canonical storage health case. `color` is the badge color the console
/// renders next to the status name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageStatus {
    pub id: String,
    pub name: String,
    pub color: String,
}

impl StorageStatus {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }
}

impl Validate for StorageStatus {
    fn validate(&self) -> Result<(), ContractViolation> {
        validate_text("storage_status.id", &self.id, 64)?;
        validate_text("storage_status.name", &self.name, 128)?;
        validate_text("storage_status.color", &self.color, 32)?;
        Ok(())
    }
}

/// Canonical storage plan tier offered to a zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageTier {
    pub id: String,
    pub name: String,
    pub description: String,
    pub features: Vec<String>,
}

impl StorageTier {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        features: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            features,
        }
    }
}

impl Validate for StorageTier {
    fn validate(&self) -> Result<(), ContractViolation> {
        validate_text("storage_tier.id", &self.id, 64)?;
        validate_text("storage_tier.name", &self.name, 128)?;
        validate_text("storage_tier.description", &self.description, 256)?;
        if self.features.is_empty() {
            return Err(ContractViolation::InvalidValue {
                field: "storage_tier.features",
                reason: "must contain at least one feature",
            });
        }
        for feature in &self.features {
            validate_text("storage_tier.features[]", feature, 128)?;
        }
        Ok(())
    }
}
