#![forbid(unsafe_code)]

//! Vehicle registry documents and the fleet CRUD boundary.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::RwLock;

use crate::context::{DirectoryError, DirectoryResult, TenantId};

/// Lifecycle state of a registered vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    /// In service and schedulable.
    Active,
    /// Temporarily out of rotation for service work.
    Maintenance,
    /// Retired or otherwise unavailable.
    Inactive,
}

impl VehicleStatus {
    /// String tag used in serialized documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Maintenance => "maintenance",
            Self::Inactive => "inactive",
        }
    }
}

/// Error for unknown vehicle status tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVehicleStatusError(String);

impl fmt::Display for ParseVehicleStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown vehicle status {:?}", self.0)
    }
}

impl std::error::Error for ParseVehicleStatusError {}

impl FromStr for VehicleStatus {
    type Err = ParseVehicleStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "maintenance" => Ok(Self::Maintenance),
            "inactive" => Ok(Self::Inactive),
            other => Err(ParseVehicleStatusError(other.to_string())),
        }
    }
}

/// Identifier for a vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(pub String);

impl VehicleId {
    /// Create a new vehicle id.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VehicleId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A fleet vehicle document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Stable identifier.
    pub id: VehicleId,
    /// Display label (make and model).
    pub label: String,
    /// License plate.
    pub plate: String,
    /// Lifecycle state.
    pub status: VehicleStatus,
}

/// CRUD access to a tenant's vehicle documents.
///
/// Consumed at the boundary only; implementations own persistence,
/// retries, and auth.
pub trait VehicleRegistry {
    /// List the tenant's vehicles in insertion order.
    fn list(&self, tenant: &TenantId) -> DirectoryResult<Vec<Vehicle>>;

    /// Register a new vehicle. Fails if the id is already taken.
    fn create(&self, tenant: &TenantId, vehicle: Vehicle) -> DirectoryResult<()>;

    /// Replace an existing vehicle document.
    fn update(&self, tenant: &TenantId, vehicle: Vehicle) -> DirectoryResult<()>;
}

/// In-memory registry for tests and demos.
#[derive(Debug, Default)]
pub struct MemoryVehicleRegistry {
    fleets: RwLock<HashMap<TenantId, Vec<Vehicle>>>,
}

impl MemoryVehicleRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl VehicleRegistry for MemoryVehicleRegistry {
    fn list(&self, tenant: &TenantId) -> DirectoryResult<Vec<Vehicle>> {
        let fleets = self
            .fleets
            .read()
            .expect("MemoryVehicleRegistry lock poisoned");
        Ok(fleets.get(tenant).cloned().unwrap_or_default())
    }

    fn create(&self, tenant: &TenantId, vehicle: Vehicle) -> DirectoryResult<()> {
        let mut fleets = self
            .fleets
            .write()
            .expect("MemoryVehicleRegistry lock poisoned");
        let fleet = fleets.entry(tenant.clone()).or_default();
        if fleet.iter().any(|existing| existing.id == vehicle.id) {
            return Err(DirectoryError::Backend(format!(
                "vehicle {:?} already registered",
                vehicle.id.as_str()
            )));
        }
        fleet.push(vehicle);
        Ok(())
    }

    fn update(&self, tenant: &TenantId, vehicle: Vehicle) -> DirectoryResult<()> {
        let mut fleets = self
            .fleets
            .write()
            .expect("MemoryVehicleRegistry lock poisoned");
        let fleet = fleets.entry(tenant.clone()).or_default();
        match fleet.iter_mut().find(|existing| existing.id == vehicle.id) {
            Some(slot) => {
                *slot = vehicle;
                Ok(())
            }
            None => Err(DirectoryError::Backend(format!(
                "vehicle {:?} not registered",
                vehicle.id.as_str()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn van() -> Vehicle {
        Vehicle {
            id: VehicleId::from("van-1"),
            label: "Ford Transit".to_string(),
            plate: "8ABC123".to_string(),
            status: VehicleStatus::Active,
        }
    }

    #[test]
    fn status_tags_round_trip() {
        for status in [
            VehicleStatus::Active,
            VehicleStatus::Maintenance,
            VehicleStatus::Inactive,
        ] {
            assert_eq!(status.as_str().parse::<VehicleStatus>(), Ok(status));
        }
    }

    #[test]
    fn unknown_status_tag_is_rejected() {
        assert!("totaled".parse::<VehicleStatus>().is_err());
        assert!("Active".parse::<VehicleStatus>().is_err());
    }

    #[test]
    fn create_then_list() {
        let registry = MemoryVehicleRegistry::new();
        let tenant = TenantId::from("acme");
        registry.create(&tenant, van()).unwrap();
        assert_eq!(registry.list(&tenant).unwrap(), vec![van()]);
    }

    #[test]
    fn create_duplicate_fails() {
        let registry = MemoryVehicleRegistry::new();
        let tenant = TenantId::from("acme");
        registry.create(&tenant, van()).unwrap();
        assert!(registry.create(&tenant, van()).is_err());
    }

    #[test]
    fn update_replaces_document() {
        let registry = MemoryVehicleRegistry::new();
        let tenant = TenantId::from("acme");
        registry.create(&tenant, van()).unwrap();

        let mut serviced = van();
        serviced.status = VehicleStatus::Maintenance;
        registry.update(&tenant, serviced.clone()).unwrap();
        assert_eq!(registry.list(&tenant).unwrap(), vec![serviced]);
    }

    #[test]
    fn update_missing_vehicle_fails() {
        let registry = MemoryVehicleRegistry::new();
        assert!(registry.update(&TenantId::from("acme"), van()).is_err());
    }

    #[test]
    fn fleets_are_isolated_per_tenant() {
        let registry = MemoryVehicleRegistry::new();
        registry.create(&TenantId::from("acme"), van()).unwrap();
        assert!(registry.list(&TenantId::from("other")).unwrap().is_empty());
    }
}
