//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{marchamo::Marchamo, revision::Revision, vehicle::Vehicle};
pub use repository::{MarchamoRepository, RevisionRepository, VehicleRepository};
pub use value_object::{
    marchamo_status::MarchamoStatus, plate::Plate, revision_result::RevisionResult,
    validity_year::ValidityYear,
};
