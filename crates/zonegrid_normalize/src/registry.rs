#![forbid(unsafe_code)]

use zonegrid_contracts::{ServiceType, StorageStatus, StorageTier};

// Known-case tables. Adding a recognized case means adding a row here,
// never a branch in the canonicalizers. Keys are lowercase; lookups
// lowercase the probe tag exactly once.

struct ServiceTypeRow {
    id: &'static str,
    name: &'static str,
    icon: &'static str,
}

const SERVICE_TYPE_ROWS: &[ServiceTypeRow] = &[
    ServiceTypeRow {
        id: "wan",
        name: "WAN",
        icon: "globe",
    },
    ServiceTypeRow {
        id: "lan",
        name: "LAN",
        icon: "network",
    },
    ServiceTypeRow {
        id: "identity",
        name: "Identity & Access",
        icon: "shield",
    },
    ServiceTypeRow {
        id: "dns",
        name: "DNS",
        icon: "server",
    },
    ServiceTypeRow {
        id: "vpn",
        name: "VPN",
        icon: "lock",
    },
    ServiceTypeRow {
        id: "messaging",
        name: "Messaging",
        icon: "mail",
    },
    ServiceTypeRow {
        id: "storage",
        name: "Storage",
        icon: "database",
    },
    ServiceTypeRow {
        id: "backup",
        name: "Backup & Restore",
        icon: "archive",
    },
];

struct StorageStatusRow {
    id: &'static str,
    name: &'static str,
    color: &'static str,
}

const STORAGE_STATUS_ROWS: &[StorageStatusRow] = &[
    StorageStatusRow {
        id: "operational",
        name: "Operational",
        color: "green",
    },
    StorageStatusRow {
        id: "degraded",
        name: "Degraded",
        color: "yellow",
    },
    StorageStatusRow {
        id: "maintenance",
        name: "Maintenance",
        color: "blue",
    },
    StorageStatusRow {
        id: "offline",
        name: "Offline",
        color: "red",
    },
];

struct StorageTierRow {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    features: &'static [&'static str],
}

const STORAGE_TIER_ROWS: &[StorageTierRow] = &[
    StorageTierRow {
        id: "basic",
        name: "Basic",
        description: "Entry tier for small zones.",
        features: &["5 GB Quota", "Daily Backup"],
    },
    StorageTierRow {
        id: "business",
        name: "Business",
        description: "Standard tier for active zones.",
        features: &["100 GB Quota", "Hourly Backup", "Priority Support"],
    },
    StorageTierRow {
        id: "enterprise",
        name: "Enterprise",
        description: "Dedicated tier for large deployments.",
        features: &[
            "Unlimited Quota",
            "Continuous Backup",
            "Priority Support",
            "Dedicated Capacity",
        ],
    },
];

impl ServiceTypeRow {
    fn to_canonical(&self) -> ServiceType {
        ServiceType::new(self.id, self.name, self.icon)
    }
}

impl StorageStatusRow {
    fn to_canonical(&self) -> StorageStatus {
        StorageStatus::new(self.id, self.name, self.color)
    }
}

impl StorageTierRow {
    fn to_canonical(&self) -> StorageTier {
        StorageTier::new(
            self.id,
            self.name,
            self.description,
            self.features.iter().map(|f| f.to_string()).collect(),
        )
    }
}

pub(crate) fn lookup_service_type(tag: &str) -> Option<ServiceType> {
    let key = tag.to_ascii_lowercase();
    SERVICE_TYPE_ROWS
        .iter()
        .find(|row| row.id == key)
        .map(ServiceTypeRow::to_canonical)
}

pub(crate) fn lookup_storage_status(tag: &str) -> Option<StorageStatus> {
    let key = tag.to_ascii_lowercase();
    STORAGE_STATUS_ROWS
        .iter()
        .find(|row| row.id == key)
        .map(StorageStatusRow::to_canonical)
}

pub(crate) fn lookup_storage_tier(tag: &str) -> Option<StorageTier> {
    let key = tag.to_ascii_lowercase();
    STORAGE_TIER_ROWS
        .iter()
        .find(|row| row.id == key)
        .map(StorageTierRow::to_canonical)
}

/// All recognized service cases, in table order. Used by picker surfaces.
pub fn known_service_types() -> Vec<ServiceType> {
    SERVICE_TYPE_ROWS
        .iter()
        .map(ServiceTypeRow::to_canonical)
        .collect()
}

pub fn known_storage_statuses() -> Vec<StorageStatus> {
    STORAGE_STATUS_ROWS
        .iter()
        .map(StorageStatusRow::to_canonical)
        .collect()
}

pub fn known_storage_tiers() -> Vec<StorageTier> {
    STORAGE_TIER_ROWS
        .iter()
        .map(StorageTierRow::to_canonical)
        .collect()
}
