//! Presentation Layer
//!
//! HTTP handlers, DTOs and routers.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::RegistryAppState;
pub use router::{
    lookup_router, lookup_router_generic, registry_router, registry_router_generic,
};
