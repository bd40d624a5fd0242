#![forbid(unsafe_code)]

use crate::common::{validate_text, ContractViolation, Validate};
use serde::{Deserialize, Serialize};

/// Closed account-state vocabulary. Anything outside these three tags is
/// normalized to `Pending` before a record counts as canonical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Suspended,
    Pending,
}

impl UserStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Suspended => "suspended",
            UserStatus::Pending => "pending",
        }
    }

    /// Case-insensitive parse with the `Pending` default the console
    /// expects for unrecognized or missing states.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "active" => UserStatus::Active,
            "suspended" => UserStatus::Suspended,
            _ => UserStatus::Pending,
        }
    }
}

/// Fully conforming zone member record. Certificate fields are the only
/// nullable fields; absent certificates are `None`, never a sentinel string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneUser {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub last_login: String,
    pub mfa_status: String,
    pub biometric_enrolled: bool,
    pub status: UserStatus,
    pub certificate_issued: Option<String>,
    pub certificate_expiry: Option<String>,
}

impl Validate for ZoneUser {
    fn validate(&self) -> Result<(), ContractViolation> {
        validate_text("zone_user.id", &self.id, 64)?;
        validate_text("zone_user.full_name", &self.full_name, 128)?;
        validate_text("zone_user.email", &self.email, 128)?;
        if !self.email.contains('@') {
            return Err(ContractViolation::InvalidValue {
                field: "zone_user.email",
                reason: "must contain '@'",
            });
        }
        validate_text("zone_user.role", &self.role, 64)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_user_01_status_parse_is_case_insensitive() {
        assert_eq!(UserStatus::from_tag("ACTIVE"), UserStatus::Active);
        assert_eq!(UserStatus::from_tag("Suspended"), UserStatus::Suspended);
        assert_eq!(UserStatus::from_tag(" pending "), UserStatus::Pending);
    }

    #[test]
    fn at_user_02_unknown_status_defaults_to_pending() {
        assert_eq!(UserStatus::from_tag("locked"), UserStatus::Pending);
        assert_eq!(UserStatus::from_tag(""), UserStatus::Pending);
    }

    #[test]
    fn at_user_03_status_round_trips_through_as_str() {
        for status in [
            UserStatus::Active,
            UserStatus::Suspended,
            UserStatus::Pending,
        ] {
            assert_eq!(UserStatus::from_tag(status.as_str()), status);
        }
    }
}
