#![forbid(unsafe_code)]

use serde_json::Value;

// Shallow structural guards over wire values. A passing value is trusted
// as already canonical even when a field carries the wrong value type;
// field extraction downstream coerces through the safe renderer.

fn has_fields(value: &Value, fields: &[&str]) -> bool {
    let Some(map) = value.as_object() else {
        return false;
    };
    fields.iter().all(|field| map.contains_key(*field))
}

pub fn is_service_type(value: &Value) -> bool {
    has_fields(value, &["id", "name", "icon"])
}

pub fn is_storage_status(value: &Value) -> bool {
    has_fields(value, &["id", "name", "color"])
}

pub fn is_storage_tier(value: &Value) -> bool {
    has_fields(value, &["id", "name", "description", "features"])
        && value
            .get("features")
            .map(Value::is_array)
            .unwrap_or(false)
}

pub fn is_zone_user(value: &Value) -> bool {
    // Certificate fields are nullable and not required for recognition.
    has_fields(
        value,
        &[
            "id",
            "fullName",
            "email",
            "role",
            "lastLogin",
            "mfaStatus",
            "biometricEnrolled",
            "status",
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn at_guard_01_canonical_shapes_pass() {
        assert!(is_service_type(&json!({
            "id": "wan", "name": "WAN", "icon": "globe"
        })));
        assert!(is_storage_status(&json!({
            "id": "operational", "name": "Operational", "color": "green"
        })));
        assert!(is_storage_tier(&json!({
            "id": "basic", "name": "Basic",
            "description": "Entry tier.", "features": ["5 GB Quota"]
        })));
    }

    #[test]
    fn at_guard_02_bare_tags_and_partials_fail() {
        assert!(!is_service_type(&json!("wan")));
        assert!(!is_service_type(&json!({ "id": "wan", "name": "WAN" })));
        assert!(!is_storage_status(&json!(null)));
        assert!(!is_storage_tier(&json!({
            "id": "basic", "name": "Basic", "description": "Entry tier.",
            "features": "not-a-sequence"
        })));
    }

    #[test]
    fn at_guard_03_wrong_field_value_types_still_pass() {
        // Shallow trust: presence of the field names is enough.
        assert!(is_service_type(&json!({
            "id": 7, "name": true, "icon": null
        })));
    }

    #[test]
    fn at_guard_04_zone_user_requires_core_fields_only() {
        let full = json!({
            "id": "u1", "fullName": "Ada", "email": "ada@zone.example",
            "role": "Admin", "lastLogin": "2026-08-01", "mfaStatus": "enabled",
            "biometricEnrolled": true, "status": "active"
        });
        assert!(is_zone_user(&full));

        let mut partial = full.clone();
        if let Some(map) = partial.as_object_mut() {
            map.remove("status");
        }
        assert!(!is_zone_user(&partial));
    }
}
