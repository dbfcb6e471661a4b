//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{MarchamoId, RevisionId, VehicleId};

use crate::domain::entity::{marchamo::Marchamo, revision::Revision, vehicle::Vehicle};
use crate::domain::value_object::plate::Plate;
use crate::error::RegistryResult;

/// Vehicle repository trait
#[trait_variant::make(VehicleRepository: Send)]
pub trait LocalVehicleRepository {
    /// Create a new vehicle
    async fn create(&self, vehicle: &Vehicle) -> RegistryResult<()>;

    /// Find vehicle by plate
    async fn find_by_plate(&self, plate: &Plate) -> RegistryResult<Option<Vehicle>>;

    /// List vehicles ordered by plate
    async fn list(&self, limit: i64, offset: i64) -> RegistryResult<Vec<Vehicle>>;

    /// Check if a plate is already registered
    async fn exists_by_plate(&self, plate: &Plate) -> RegistryResult<bool>;

    /// Update vehicle
    async fn update(&self, vehicle: &Vehicle) -> RegistryResult<()>;

    /// Delete vehicle and its records, returns whether a row was removed
    async fn delete_by_plate(&self, plate: &Plate) -> RegistryResult<bool>;
}

/// Marchamo repository trait
#[trait_variant::make(MarchamoRepository: Send)]
pub trait LocalMarchamoRepository {
    /// Create a new marchamo record
    async fn create(&self, marchamo: &Marchamo) -> RegistryResult<()>;

    /// Find marchamo by ID
    async fn find_by_id(&self, marchamo_id: MarchamoId) -> RegistryResult<Option<Marchamo>>;

    /// List marchamos for one vehicle, newest year first
    async fn list_for_vehicle(&self, vehicle_id: VehicleId) -> RegistryResult<Vec<Marchamo>>;

    /// Update marchamo
    async fn update(&self, marchamo: &Marchamo) -> RegistryResult<()>;

    /// Delete marchamo, returns whether a row was removed
    async fn delete(&self, marchamo_id: MarchamoId) -> RegistryResult<bool>;
}

/// Revision repository trait
#[trait_variant::make(RevisionRepository: Send)]
pub trait LocalRevisionRepository {
    /// Create a new revision record
    async fn create(&self, revision: &Revision) -> RegistryResult<()>;

    /// Find revision by ID
    async fn find_by_id(&self, revision_id: RevisionId) -> RegistryResult<Option<Revision>>;

    /// List revisions for one vehicle, newest year first
    async fn list_for_vehicle(&self, vehicle_id: VehicleId) -> RegistryResult<Vec<Revision>>;

    /// Update revision
    async fn update(&self, revision: &Revision) -> RegistryResult<()>;

    /// Delete revision, returns whether a row was removed
    async fn delete(&self, revision_id: RevisionId) -> RegistryResult<bool>;
}
