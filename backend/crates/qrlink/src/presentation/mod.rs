//! Presentation Layer
//!
//! HTTP handlers, DTOs and routers.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::QrLinkAppState;
pub use router::{qr_router, qr_router_generic, verify_router, verify_router_generic};
