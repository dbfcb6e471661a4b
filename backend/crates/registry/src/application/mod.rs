//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod lookup_vehicle;
pub mod manage_records;
pub mod manage_vehicles;

// Re-exports
pub use config::RegistryConfig;
pub use lookup_vehicle::{LookupVehicleUseCase, VehicleLookup};
pub use manage_records::{MarchamoInput, RecordAdminUseCase, RevisionInput};
pub use manage_vehicles::{RegisterVehicleInput, UpdateVehicleInput, VehicleAdminUseCase};
