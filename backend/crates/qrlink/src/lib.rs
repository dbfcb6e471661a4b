//! QR Link Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - The plate token codec
//! - `application/` - Use cases and configuration
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! Persistence comes from the `registry` crate's repository traits; this
//! crate has no storage of its own.
//!
//! ## Security Model
//! - Tokens are `base64url(plate) "." base64url(HMAC-SHA256(secret, plate))`,
//!   URL-safe and unpadded
//! - Tokens never expire; validity is a pure function of payload and secret
//! - Signature comparison is constant-time
//! - Invalid tokens and unknown plates are indistinguishable to clients

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::QrLinkConfig;
pub use domain::codec::PlateTokenCodec;
pub use error::{QrLinkError, QrLinkResult};
pub use presentation::router::{qr_router, verify_router};

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
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}

#[cfg(test)]
mod tests;
