#![forbid(unsafe_code)]

use crate::guard::{is_service_type, is_storage_status, is_storage_tier};
use crate::registry::{lookup_service_type, lookup_storage_status, lookup_storage_tier};
use crate::render::safe_render_text;
use serde_json::Value;
use zonegrid_contracts::{ServiceType, StorageStatus, StorageTier};

// Synthesis defaults for tags outside the known-case tables.
const FALLBACK_ICON: &str = "circle";
const FALLBACK_COLOR: &str = "gray";
const FALLBACK_TIER_DESCRIPTION: &str = "Custom storage tier.";
const FALLBACK_TIER_FEATURE: &str = "Custom Configuration";

/// Raw-or-canonical input for the service family. `Canonical` passes
/// through by move, so repeated canonicalization never copies.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceTypeRaw {
    Tag(String),
    Wire(Value),
    Canonical(ServiceType),
}

impl From<&str> for ServiceTypeRaw {
    fn from(tag: &str) -> Self {
        ServiceTypeRaw::Tag(tag.to_string())
    }
}

impl From<String> for ServiceTypeRaw {
    fn from(tag: String) -> Self {
        ServiceTypeRaw::Tag(tag)
    }
}

impl From<Value> for ServiceTypeRaw {
    fn from(value: Value) -> Self {
        ServiceTypeRaw::Wire(value)
    }
}

impl From<ServiceType> for ServiceTypeRaw {
    fn from(canonical: ServiceType) -> Self {
        ServiceTypeRaw::Canonical(canonical)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StorageStatusRaw {
    Tag(String),
    Wire(Value),
    Canonical(StorageStatus),
}

impl From<&str> for StorageStatusRaw {
    fn from(tag: &str) -> Self {
        StorageStatusRaw::Tag(tag.to_string())
    }
}

impl From<String> for StorageStatusRaw {
    fn from(tag: String) -> Self {
        StorageStatusRaw::Tag(tag)
    }
}

impl From<Value> for StorageStatusRaw {
    fn from(value: Value) -> Self {
        StorageStatusRaw::Wire(value)
    }
}

impl From<StorageStatus> for StorageStatusRaw {
    fn from(canonical: StorageStatus) -> Self {
        StorageStatusRaw::Canonical(canonical)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StorageTierRaw {
    Tag(String),
    Wire(Value),
    Canonical(StorageTier),
}

impl From<&str> for StorageTierRaw {
    fn from(tag: &str) -> Self {
        StorageTierRaw::Tag(tag.to_string())
    }
}

impl From<String> for StorageTierRaw {
    fn from(tag: String) -> Self {
        StorageTierRaw::Tag(tag)
    }
}

impl From<Value> for StorageTierRaw {
    fn from(value: Value) -> Self {
        StorageTierRaw::Wire(value)
    }
}

impl From<StorageTier> for StorageTierRaw {
    fn from(canonical: StorageTier) -> Self {
        StorageTierRaw::Canonical(canonical)
    }
}

/// Total canonicalizer for the service family. Canonical input passes
/// through untouched; wire objects that satisfy the guard are trusted and
/// extracted; everything else resolves as a tag through the known-case
/// table, synthesizing a fallback for unknown tags.
pub fn service_type_from_raw(raw: impl Into<ServiceTypeRaw>) -> ServiceType {
    match raw.into() {
        ServiceTypeRaw::Canonical(canonical) => canonical,
        ServiceTypeRaw::Wire(value) if is_service_type(&value) => ServiceType::new(
            text_field(&value, "id"),
            text_field(&value, "name"),
            text_field(&value, "icon"),
        ),
        ServiceTypeRaw::Wire(value) => service_type_from_tag(&wire_tag(&value)),
        ServiceTypeRaw::Tag(tag) => service_type_from_tag(&tag),
    }
}

pub fn service_type_from_tag(tag: &str) -> ServiceType {
    lookup_service_type(tag).unwrap_or_else(|| {
        // Fallback id keeps the caller's original casing; known ids are
        // always lowercase. Kept as-is, see the design notes.
        ServiceType::new(tag, capitalize(tag), FALLBACK_ICON)
    })
}

pub fn storage_status_from_raw(raw: impl Into<StorageStatusRaw>) -> StorageStatus {
    match raw.into() {
        StorageStatusRaw::Canonical(canonical) => canonical,
        StorageStatusRaw::Wire(value) if is_storage_status(&value) => StorageStatus::new(
            text_field(&value, "id"),
            text_field(&value, "name"),
            text_field(&value, "color"),
        ),
        StorageStatusRaw::Wire(value) => storage_status_from_tag(&wire_tag(&value)),
        StorageStatusRaw::Tag(tag) => storage_status_from_tag(&tag),
    }
}

pub fn storage_status_from_tag(tag: &str) -> StorageStatus {
    lookup_storage_status(tag)
        .unwrap_or_else(|| StorageStatus::new(tag, capitalize(tag), FALLBACK_COLOR))
}

pub fn storage_tier_from_raw(raw: impl Into<StorageTierRaw>) -> StorageTier {
    match raw.into() {
        StorageTierRaw::Canonical(canonical) => canonical,
        StorageTierRaw::Wire(value) if is_storage_tier(&value) => StorageTier::new(
            text_field(&value, "id"),
            text_field(&value, "name"),
            text_field(&value, "description"),
            feature_list(&value),
        ),
        StorageTierRaw::Wire(value) => storage_tier_from_tag(&wire_tag(&value)),
        StorageTierRaw::Tag(tag) => storage_tier_from_tag(&tag),
    }
}

pub fn storage_tier_from_tag(tag: &str) -> StorageTier {
    lookup_storage_tier(tag).unwrap_or_else(|| {
        StorageTier::new(
            tag,
            capitalize(tag),
            FALLBACK_TIER_DESCRIPTION,
            vec![FALLBACK_TIER_FEATURE.to_string()],
        )
    })
}

fn text_field(value: &Value, field: &str) -> String {
    safe_render_text(value.get(field))
}

fn feature_list(value: &Value) -> Vec<String> {
    match value.get("features").and_then(Value::as_array) {
        Some(items) => items.iter().map(|item| safe_render_text(Some(item))).collect(),
        None => vec![FALLBACK_TIER_FEATURE.to_string()],
    }
}

fn wire_tag(value: &Value) -> String {
    safe_render_text(Some(value))
}

fn capitalize(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn at_canon_01_known_tags_resolve_case_insensitively() {
        let upper = storage_status_from_raw("Operational");
        let lower = storage_status_from_raw("operational");
        assert_eq!(upper.id, "operational");
        assert_eq!(upper.id, lower.id);
        assert_eq!(upper.color, "green");
    }

    #[test]
    fn at_canon_02_unknown_tags_synthesize_deterministically() {
        let first = service_type_from_raw("quantum");
        let second = service_type_from_raw("quantum");
        assert_eq!(first.id, "quantum");
        assert_eq!(first.name, "Quantum");
        assert_eq!(first.icon, "circle");
        assert_eq!(first, second);
    }

    #[test]
    fn at_canon_03_fallback_id_preserves_original_casing() {
        let synthesized = service_type_from_raw("Unknown-Tag");
        assert_eq!(synthesized.id, "Unknown-Tag");
        assert_eq!(synthesized.name, "Unknown-Tag");
    }

    #[test]
    fn at_canon_04_canonical_input_passes_through_unchanged() {
        let canonical = service_type_from_raw("wan");
        let again = service_type_from_raw(canonical.clone());
        assert_eq!(again, canonical);
    }

    #[test]
    fn at_canon_05_canonicalization_is_idempotent() {
        for tag in ["wan", "Operational", "business", "no-such-tag"] {
            let once = storage_tier_from_raw(tag);
            let twice = storage_tier_from_raw(once.clone());
            assert_eq!(twice.id, once.id);
            assert_eq!(twice, once);
        }
    }

    #[test]
    fn at_canon_06_wire_objects_are_trusted_and_extracted() {
        let wire = json!({
            "id": "archival", "name": "Archival", "icon": "box"
        });
        let canonical = service_type_from_raw(wire);
        assert_eq!(canonical.id, "archival");
        assert_eq!(canonical.icon, "box");
    }

    #[test]
    fn at_canon_07_wire_strings_resolve_as_tags() {
        let canonical = service_type_from_raw(json!("identity"));
        assert_eq!(canonical.id, "identity");
        assert_eq!(canonical.name, "Identity & Access");
    }

    #[test]
    fn at_canon_08_shallow_trusted_fields_coerce_without_panic() {
        let wire = json!({ "id": 7, "name": true, "icon": null });
        let canonical = service_type_from_raw(wire);
        assert_eq!(canonical.id, "7");
        assert_eq!(canonical.name, "true");
        assert_eq!(canonical.icon, "");
    }

    #[test]
    fn at_canon_09_tier_fallback_carries_documented_defaults() {
        let tier = storage_tier_from_raw("platinum");
        assert_eq!(tier.id, "platinum");
        assert_eq!(tier.name, "Platinum");
        assert_eq!(tier.description, "Custom storage tier.");
        assert_eq!(tier.features, vec!["Custom Configuration".to_string()]);
    }

    #[test]
    fn at_canon_10_status_fallback_is_gray() {
        let status = storage_status_from_raw("rebalancing");
        assert_eq!(status.id, "rebalancing");
        assert_eq!(status.color, "gray");
    }
}
