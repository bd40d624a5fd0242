#![forbid(unsafe_code)]

pub mod canonical;
pub mod guard;
pub mod registry;
pub mod render;
pub mod users;

pub use canonical::{
    service_type_from_raw, service_type_from_tag, storage_status_from_raw,
    storage_status_from_tag, storage_tier_from_raw, storage_tier_from_tag, ServiceTypeRaw,
    StorageStatusRaw, StorageTierRaw,
};
pub use guard::{is_service_type, is_storage_status, is_storage_tier, is_zone_user};
pub use registry::{known_service_types, known_storage_statuses, known_storage_tiers};
pub use render::safe_render_text;
pub use users::{normalize_users, normalize_users_value, RawZoneUser};
