//! Vehicle Lookup Use Case
//!
//! Public by-plate lookup joining the vehicle with its marchamo and
//! revision histories.

use std::sync::Arc;

use crate::domain::entity::{marchamo::Marchamo, revision::Revision, vehicle::Vehicle};
use crate::domain::repository::{MarchamoRepository, RevisionRepository, VehicleRepository};
use crate::domain::value_object::plate::Plate;
use crate::error::{RegistryError, RegistryResult};

/// Lookup result: the vehicle with its record histories
pub struct VehicleLookup {
    pub vehicle: Vehicle,
    pub marchamos: Vec<Marchamo>,
    pub revisiones: Vec<Revision>,
}

/// Vehicle lookup use case
pub struct LookupVehicleUseCase<V, M, R>
where
    V: VehicleRepository,
    M: MarchamoRepository,
    R: RevisionRepository,
{
    vehicle_repo: Arc<V>,
    marchamo_repo: Arc<M>,
    revision_repo: Arc<R>,
}

impl<V, M, R> LookupVehicleUseCase<V, M, R>
where
    V: VehicleRepository,
    M: MarchamoRepository,
    R: RevisionRepository,
{
    pub fn new(vehicle_repo: Arc<V>, marchamo_repo: Arc<M>, revision_repo: Arc<R>) -> Self {
        Self {
            vehicle_repo,
            marchamo_repo,
            revision_repo,
        }
    }

    pub async fn execute(&self, plate_text: &str) -> RegistryResult<VehicleLookup> {
        // Unparseable plate text reads the same as an unknown plate on the
        // public surface.
        let plate =
            Plate::new(plate_text).map_err(|_| RegistryError::VehicleNotFound)?;

        let vehicle = self
            .vehicle_repo
            .find_by_plate(&plate)
            .await?
            .ok_or(RegistryError::VehicleNotFound)?;

        let marchamos = self.marchamo_repo.list_for_vehicle(vehicle.vehicle_id).await?;
        let revisiones = self.revision_repo.list_for_vehicle(vehicle.vehicle_id).await?;

        Ok(VehicleLookup {
            vehicle,
            marchamos,
            revisiones,
        })
    }
}
