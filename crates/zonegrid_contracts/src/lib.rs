#![forbid(unsafe_code)]

pub mod common;
pub mod service;
pub mod storage;
pub mod zone_user;

pub use common::{ContractViolation, Validate};
pub use service::ServiceType;
pub use storage::{StorageStatus, StorageTier};
pub use zone_user::{UserStatus, ZoneUser};
