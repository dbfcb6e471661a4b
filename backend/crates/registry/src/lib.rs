//! Registry Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! ## Features
//! - Vehicle registration keyed by plate number
//! - Annual road-tax (marchamo) records, one per vehicle and year
//! - Technical inspection (revision) records with re-inspection history
//! - Public by-plate lookup that never exposes owner data
//!
//! ## Data Model
//! - Plates are stored normalized (trimmed, upper-cased) and unique
//! - Record years are bounded; marchamo amounts are whole colones
//! - Deleting a vehicle cascades to its records

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::RegistryConfig;
pub use error::{RegistryError, RegistryResult};
pub use infra::postgres::PgRegistryRepository;
pub use presentation::router::{lookup_router, registry_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgRegistryRepository as RegistryStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

#[cfg(test)]
mod tests;
