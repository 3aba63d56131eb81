use std::{collections::HashSet, fmt};

use serde::{Deserialize, Serialize};

/// One managed camera, as returned by a single inventory query.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Device {
    pub index: u32,
    pub description: String,
    pub active: bool,
    pub ip: String,
}

impl Device {
    pub fn new(
        index: u32,
        description: impl Into<String>,
        active: bool,
        ip: impl Into<String>,
    ) -> Self {
        Self {
            index,
            description: description.into(),
            active,
            ip: ip.into(),
        }
    }

    /// Checks the invariants every snapshot handed to a view must hold.
    pub fn validate_snapshot(devices: &[Device]) -> Result<(), SnapshotViolation> {
        let mut seen = HashSet::with_capacity(devices.len());
        for device in devices {
            if device.index == 0 {
                return Err(SnapshotViolation::ZeroIndex);
            }
            if !seen.insert(device.index) {
                return Err(SnapshotViolation::DuplicateIndex(device.index));
            }
            if device.description.trim().is_empty() {
                return Err(SnapshotViolation::EmptyDescription(device.index));
            }
            if device.ip.trim().is_empty() {
                return Err(SnapshotViolation::EmptyIp(device.index));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SnapshotViolation {
    ZeroIndex,
    DuplicateIndex(u32),
    EmptyDescription(u32),
    EmptyIp(u32),
}

impl fmt::Display for SnapshotViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroIndex => write!(f, "device index must be positive"),
            Self::DuplicateIndex(index) => write!(f, "duplicate device index {index}"),
            Self::EmptyDescription(index) => write!(f, "device {index} has no description"),
            Self::EmptyIp(index) => write!(f, "device {index} has no address"),
        }
    }
}

/// Up/down record kept by the fleet scanner backend for every MAC it has seen.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeviceStatus {
    pub mac_address: String,
    pub ip_address: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub version: String,
    pub is_up: bool,
    pub last_seen: String,
    #[serde(default)]
    pub initial_uptime: Option<String>,
    #[serde(default)]
    pub stream_id: Option<i64>,
}

impl DeviceStatus {
    /// Location is the operator-facing label; unlabelled devices fall back to
    /// their MAC address.
    pub fn to_device(&self, index: u32) -> Device {
        let description = if self.location.trim().is_empty() {
            self.mac_address.clone()
        } else {
            self.location.clone()
        };
        Device {
            index,
            description,
            active: self.is_up,
            ip: self.ip_address.clone(),
        }
    }
}
