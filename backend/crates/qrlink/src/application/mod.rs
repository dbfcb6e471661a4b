//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod issue_link;
pub mod verify_link;

// Re-exports
pub use config::QrLinkConfig;
pub use issue_link::{IssueLinkOutput, IssueLinkUseCase};
pub use verify_link::VerifyLinkUseCase;
