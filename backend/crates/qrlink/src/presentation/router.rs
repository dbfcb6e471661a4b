//! QR Link Routers

use axum::{Router, routing::get};
use std::sync::Arc;

use registry::domain::repository::{MarchamoRepository, RevisionRepository, VehicleRepository};
use registry::infra::postgres::PgRegistryRepository;

use crate::application::config::QrLinkConfig;
use crate::presentation::handlers::{self, QrLinkAppState};

/// Create the QR issuance router with PostgreSQL repository
pub fn qr_router(repo: PgRegistryRepository, config: QrLinkConfig) -> Router {
    qr_router_generic(repo, config)
}

/// Create a generic QR issuance router for any repository implementation
pub fn qr_router_generic<R>(repo: R, config: QrLinkConfig) -> Router
where
    R: VehicleRepository + MarchamoRepository + RevisionRepository + Clone + Send + Sync + 'static,
{
    let state = QrLinkAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/{plate}", get(handlers::issue_qr_link::<R>))
        .route("/{plate}/image", get(handlers::qr_image::<R>))
        .with_state(state)
}

/// Create the token verification router with PostgreSQL repository
pub fn verify_router(repo: PgRegistryRepository, config: QrLinkConfig) -> Router {
    verify_router_generic(repo, config)
}

/// Create a generic token verification router for any repository implementation
pub fn verify_router_generic<R>(repo: R, config: QrLinkConfig) -> Router
where
    R: VehicleRepository + MarchamoRepository + RevisionRepository + Clone + Send + Sync + 'static,
{
    let state = QrLinkAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/{token}", get(handlers::verify_link::<R>))
        .with_state(state)
}
