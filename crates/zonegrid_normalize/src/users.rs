#![forbid(unsafe_code)]

use serde::Deserialize;
use serde_json::Value;
use zonegrid_contracts::{UserStatus, ZoneUser};

/// Loosely-shaped member record as it arrives on the wire. Every field is
/// defaulted so a partial object still deserializes; normalization fills
/// in the canonical defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawZoneUser {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub last_login: String,
    pub mfa_status: String,
    pub biometric_enrolled: bool,
    pub status: Option<String>,
    pub certificate_issued: Option<String>,
    pub certificate_expiry: Option<String>,
}

/// Stable map from raw member records to canonical ones: length and order
/// are preserved, the input is never mutated, and no element is dropped.
pub fn normalize_users(raw: &[RawZoneUser]) -> Vec<ZoneUser> {
    raw.iter().map(normalize_user).collect()
}

/// Wire-shape entry point: accepts the JSON array directly. Non-arrays
/// normalize to an empty list; non-object elements degrade to the fully
/// defaulted record rather than failing the whole pass.
pub fn normalize_users_value(raw: &Value) -> Vec<ZoneUser> {
    let Some(items) = raw.as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .map(|item| {
            let partial: RawZoneUser =
                serde_json::from_value(item.clone()).unwrap_or_default();
            normalize_user(&partial)
        })
        .collect()
}

fn normalize_user(raw: &RawZoneUser) -> ZoneUser {
    ZoneUser {
        id: raw.id.clone(),
        full_name: raw.full_name.clone(),
        email: raw.email.clone(),
        role: raw.role.clone(),
        last_login: raw.last_login.clone(),
        mfa_status: raw.mfa_status.clone(),
        biometric_enrolled: raw.biometric_enrolled,
        status: UserStatus::from_tag(raw.status.as_deref().unwrap_or("pending")),
        certificate_issued: raw.certificate_issued.clone(),
        certificate_expiry: raw.certificate_expiry.clone(),
    }
}
