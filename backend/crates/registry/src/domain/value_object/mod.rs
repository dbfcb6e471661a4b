//! Value Object Module

pub mod marchamo_status;
pub mod plate;
pub mod revision_result;
pub mod validity_year;

pub use marchamo_status::MarchamoStatus;
pub use plate::{Plate, PlateError};
pub use revision_result::RevisionResult;
pub use validity_year::ValidityYear;
