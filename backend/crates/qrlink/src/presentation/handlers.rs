//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use std::sync::Arc;

use registry::domain::repository::{MarchamoRepository, RevisionRepository, VehicleRepository};

use crate::application::config::QrLinkConfig;
use crate::application::{IssueLinkUseCase, VerifyLinkUseCase};
use crate::error::QrLinkResult;
use crate::presentation::dto::{LookupResponse, QrLinkResponse};

/// Shared state for QR link handlers
#[derive(Clone)]
pub struct QrLinkAppState<R>
where
    R: VehicleRepository + MarchamoRepository + RevisionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<QrLinkConfig>,
}

// ============================================================================
// Issuance
// ============================================================================

/// GET /api/qr/{plate}
pub async fn issue_qr_link<R>(
    State(state): State<QrLinkAppState<R>>,
    Path(plate): Path<String>,
) -> QrLinkResult<Json<QrLinkResponse>>
where
    R: VehicleRepository + MarchamoRepository + RevisionRepository + Clone + Send + Sync + 'static,
{
    let use_case = IssueLinkUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case.execute(&plate).await?;

    Ok(Json(QrLinkResponse {
        plate: output.plate,
        token: output.token,
        verify_url: output.verify_url,
        qr_png_base64: platform::crypto::to_base64(&output.qr_png),
    }))
}

/// GET /api/qr/{plate}/image
pub async fn qr_image<R>(
    State(state): State<QrLinkAppState<R>>,
    Path(plate): Path<String>,
) -> QrLinkResult<impl IntoResponse>
where
    R: VehicleRepository + MarchamoRepository + RevisionRepository + Clone + Send + Sync + 'static,
{
    let use_case = IssueLinkUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case.execute(&plate).await?;

    Ok(([(header::CONTENT_TYPE, "image/png")], output.qr_png))
}

// ============================================================================
// Verification
// ============================================================================

/// GET /api/v/{token}
pub async fn verify_link<R>(
    State(state): State<QrLinkAppState<R>>,
    Path(token): Path<String>,
) -> QrLinkResult<Json<LookupResponse>>
where
    R: VehicleRepository + MarchamoRepository + RevisionRepository + Clone + Send + Sync + 'static,
{
    let use_case = VerifyLinkUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    let lookup = use_case.execute(&token).await?;

    Ok(Json(lookup.into()))
}
