//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use std::sync::Arc;
use uuid::Uuid;

use kernel::id::{MarchamoId, RevisionId};

use crate::application::config::RegistryConfig;
use crate::application::{
    LookupVehicleUseCase, MarchamoInput, RecordAdminUseCase, RegisterVehicleInput, RevisionInput,
    UpdateVehicleInput, VehicleAdminUseCase,
};
use crate::domain::repository::{MarchamoRepository, RevisionRepository, VehicleRepository};
use crate::error::RegistryResult;
use crate::presentation::dto::{
    ListQuery, LookupResponse, MarchamoRequest, MarchamoResponse, RevisionRequest,
    RevisionResponse, VehicleListResponse, VehicleRequest, VehicleResponse, VehicleUpdateRequest,
};

/// Shared state for registry handlers
#[derive(Clone)]
pub struct RegistryAppState<R>
where
    R: VehicleRepository + MarchamoRepository + RevisionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<RegistryConfig>,
}

// ============================================================================
// Vehicles
// ============================================================================

/// GET /api/registry/vehicles
pub async fn list_vehicles<R>(
    State(state): State<RegistryAppState<R>>,
    Query(query): Query<ListQuery>,
) -> RegistryResult<Json<VehicleListResponse>>
where
    R: VehicleRepository + MarchamoRepository + RevisionRepository + Clone + Send + Sync + 'static,
{
    let use_case = VehicleAdminUseCase::new(state.repo.clone(), state.config.clone());

    let vehicles = use_case.list(query.limit, query.offset).await?;

    Ok(Json(VehicleListResponse {
        vehicles: vehicles.into_iter().map(Into::into).collect(),
    }))
}

/// POST /api/registry/vehicles
pub async fn create_vehicle<R>(
    State(state): State<RegistryAppState<R>>,
    Json(req): Json<VehicleRequest>,
) -> RegistryResult<(StatusCode, Json<VehicleResponse>)>
where
    R: VehicleRepository + MarchamoRepository + RevisionRepository + Clone + Send + Sync + 'static,
{
    let use_case = VehicleAdminUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterVehicleInput {
        plate: req.plate,
        owner_name: req.owner_name,
        make: req.make,
        model: req.model,
        model_year: req.model_year,
        color: req.color,
    };

    let vehicle = use_case.register(input).await?;

    Ok((StatusCode::CREATED, Json(vehicle.into())))
}

/// GET /api/registry/vehicles/{plate}
pub async fn get_vehicle<R>(
    State(state): State<RegistryAppState<R>>,
    Path(plate): Path<String>,
) -> RegistryResult<Json<VehicleResponse>>
where
    R: VehicleRepository + MarchamoRepository + RevisionRepository + Clone + Send + Sync + 'static,
{
    let use_case = VehicleAdminUseCase::new(state.repo.clone(), state.config.clone());

    let vehicle = use_case.get(&plate).await?;

    Ok(Json(vehicle.into()))
}

/// PUT /api/registry/vehicles/{plate}
pub async fn update_vehicle<R>(
    State(state): State<RegistryAppState<R>>,
    Path(plate): Path<String>,
    Json(req): Json<VehicleUpdateRequest>,
) -> RegistryResult<Json<VehicleResponse>>
where
    R: VehicleRepository + MarchamoRepository + RevisionRepository + Clone + Send + Sync + 'static,
{
    let use_case = VehicleAdminUseCase::new(state.repo.clone(), state.config.clone());

    let input = UpdateVehicleInput {
        owner_name: req.owner_name,
        make: req.make,
        model: req.model,
        model_year: req.model_year,
        color: req.color,
    };

    let vehicle = use_case.update(&plate, input).await?;

    Ok(Json(vehicle.into()))
}

/// DELETE /api/registry/vehicles/{plate}
pub async fn delete_vehicle<R>(
    State(state): State<RegistryAppState<R>>,
    Path(plate): Path<String>,
) -> RegistryResult<StatusCode>
where
    R: VehicleRepository + MarchamoRepository + RevisionRepository + Clone + Send + Sync + 'static,
{
    let use_case = VehicleAdminUseCase::new(state.repo.clone(), state.config.clone());

    use_case.remove(&plate).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Marchamos
// ============================================================================

/// GET /api/registry/vehicles/{plate}/marchamos
pub async fn list_marchamos<R>(
    State(state): State<RegistryAppState<R>>,
    Path(plate): Path<String>,
) -> RegistryResult<Json<Vec<MarchamoResponse>>>
where
    R: VehicleRepository + MarchamoRepository + RevisionRepository + Clone + Send + Sync + 'static,
{
    let use_case = record_use_case(&state);

    let marchamos = use_case.list_marchamos(&plate).await?;

    Ok(Json(marchamos.into_iter().map(Into::into).collect()))
}

/// POST /api/registry/vehicles/{plate}/marchamos
pub async fn create_marchamo<R>(
    State(state): State<RegistryAppState<R>>,
    Path(plate): Path<String>,
    Json(req): Json<MarchamoRequest>,
) -> RegistryResult<(StatusCode, Json<MarchamoResponse>)>
where
    R: VehicleRepository + MarchamoRepository + RevisionRepository + Clone + Send + Sync + 'static,
{
    let use_case = record_use_case(&state);

    let input = MarchamoInput {
        valid_year: req.valid_year,
        amount: req.amount,
        status: req.status,
    };

    let marchamo = use_case.add_marchamo(&plate, input).await?;

    Ok((StatusCode::CREATED, Json(marchamo.into())))
}

/// PUT /api/registry/marchamos/{id}
pub async fn update_marchamo<R>(
    State(state): State<RegistryAppState<R>>,
    Path(id): Path<Uuid>,
    Json(req): Json<MarchamoRequest>,
) -> RegistryResult<Json<MarchamoResponse>>
where
    R: VehicleRepository + MarchamoRepository + RevisionRepository + Clone + Send + Sync + 'static,
{
    let use_case = record_use_case(&state);

    let input = MarchamoInput {
        valid_year: req.valid_year,
        amount: req.amount,
        status: req.status,
    };

    let marchamo = use_case
        .update_marchamo(MarchamoId::from_uuid(id), input)
        .await?;

    Ok(Json(marchamo.into()))
}

/// DELETE /api/registry/marchamos/{id}
pub async fn delete_marchamo<R>(
    State(state): State<RegistryAppState<R>>,
    Path(id): Path<Uuid>,
) -> RegistryResult<StatusCode>
where
    R: VehicleRepository + MarchamoRepository + RevisionRepository + Clone + Send + Sync + 'static,
{
    let use_case = record_use_case(&state);

    use_case.remove_marchamo(MarchamoId::from_uuid(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Revisiones
// ============================================================================

/// GET /api/registry/vehicles/{plate}/revisiones
pub async fn list_revisions<R>(
    State(state): State<RegistryAppState<R>>,
    Path(plate): Path<String>,
) -> RegistryResult<Json<Vec<RevisionResponse>>>
where
    R: VehicleRepository + MarchamoRepository + RevisionRepository + Clone + Send + Sync + 'static,
{
    let use_case = record_use_case(&state);

    let revisiones = use_case.list_revisions(&plate).await?;

    Ok(Json(revisiones.into_iter().map(Into::into).collect()))
}

/// POST /api/registry/vehicles/{plate}/revisiones
pub async fn create_revision<R>(
    State(state): State<RegistryAppState<R>>,
    Path(plate): Path<String>,
    Json(req): Json<RevisionRequest>,
) -> RegistryResult<(StatusCode, Json<RevisionResponse>)>
where
    R: VehicleRepository + MarchamoRepository + RevisionRepository + Clone + Send + Sync + 'static,
{
    let use_case = record_use_case(&state);

    let input = RevisionInput {
        valid_year: req.valid_year,
        result: req.result,
        notes: req.notes,
    };

    let revision = use_case.add_revision(&plate, input).await?;

    Ok((StatusCode::CREATED, Json(revision.into())))
}

/// PUT /api/registry/revisiones/{id}
pub async fn update_revision<R>(
    State(state): State<RegistryAppState<R>>,
    Path(id): Path<Uuid>,
    Json(req): Json<RevisionRequest>,
) -> RegistryResult<Json<RevisionResponse>>
where
    R: VehicleRepository + MarchamoRepository + RevisionRepository + Clone + Send + Sync + 'static,
{
    let use_case = record_use_case(&state);

    let input = RevisionInput {
        valid_year: req.valid_year,
        result: req.result,
        notes: req.notes,
    };

    let revision = use_case
        .update_revision(RevisionId::from_uuid(id), input)
        .await?;

    Ok(Json(revision.into()))
}

/// DELETE /api/registry/revisiones/{id}
pub async fn delete_revision<R>(
    State(state): State<RegistryAppState<R>>,
    Path(id): Path<Uuid>,
) -> RegistryResult<StatusCode>
where
    R: VehicleRepository + MarchamoRepository + RevisionRepository + Clone + Send + Sync + 'static,
{
    let use_case = record_use_case(&state);

    use_case.remove_revision(RevisionId::from_uuid(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Public Lookup
// ============================================================================

/// GET /api/lookup/{plate}
pub async fn lookup_vehicle<R>(
    State(state): State<RegistryAppState<R>>,
    Path(plate): Path<String>,
) -> RegistryResult<Json<LookupResponse>>
where
    R: VehicleRepository + MarchamoRepository + RevisionRepository + Clone + Send + Sync + 'static,
{
    let use_case = LookupVehicleUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
    );

    let lookup = use_case.execute(&plate).await?;

    Ok(Json(lookup.into()))
}

// ============================================================================
// Helper Functions
// ============================================================================

fn record_use_case<R>(state: &RegistryAppState<R>) -> RecordAdminUseCase<R, R, R>
where
    R: VehicleRepository + MarchamoRepository + RevisionRepository + Clone + Send + Sync + 'static,
{
    RecordAdminUseCase::new(state.repo.clone(), state.repo.clone(), state.repo.clone())
}
