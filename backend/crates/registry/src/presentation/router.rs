//! Registry Routers

use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;

use crate::application::config::RegistryConfig;
use crate::domain::repository::{MarchamoRepository, RevisionRepository, VehicleRepository};
use crate::infra::postgres::PgRegistryRepository;
use crate::presentation::handlers::{self, RegistryAppState};

/// Create the management dashboard router with PostgreSQL repository
pub fn registry_router(repo: PgRegistryRepository, config: RegistryConfig) -> Router {
    registry_router_generic(repo, config)
}

/// Create a generic management dashboard router for any repository implementation
pub fn registry_router_generic<R>(repo: R, config: RegistryConfig) -> Router
where
    R: VehicleRepository + MarchamoRepository + RevisionRepository + Clone + Send + Sync + 'static,
{
    let state = RegistryAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/vehicles",
            get(handlers::list_vehicles::<R>).post(handlers::create_vehicle::<R>),
        )
        .route(
            "/vehicles/{plate}",
            get(handlers::get_vehicle::<R>)
                .put(handlers::update_vehicle::<R>)
                .delete(handlers::delete_vehicle::<R>),
        )
        .route(
            "/vehicles/{plate}/marchamos",
            get(handlers::list_marchamos::<R>).post(handlers::create_marchamo::<R>),
        )
        .route(
            "/marchamos/{id}",
            put(handlers::update_marchamo::<R>).delete(handlers::delete_marchamo::<R>),
        )
        .route(
            "/vehicles/{plate}/revisiones",
            get(handlers::list_revisions::<R>).post(handlers::create_revision::<R>),
        )
        .route(
            "/revisiones/{id}",
            put(handlers::update_revision::<R>).delete(handlers::delete_revision::<R>),
        )
        .with_state(state)
}

/// Create the public lookup router with PostgreSQL repository
pub fn lookup_router(repo: PgRegistryRepository, config: RegistryConfig) -> Router {
    lookup_router_generic(repo, config)
}

/// Create a generic public lookup router for any repository implementation
pub fn lookup_router_generic<R>(repo: R, config: RegistryConfig) -> Router
where
    R: VehicleRepository + MarchamoRepository + RevisionRepository + Clone + Send + Sync + 'static,
{
    let state = RegistryAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/{plate}", get(handlers::lookup_vehicle::<R>))
        .with_state(state)
}
