//! QR Link Error Types
//!
//! This module provides qrlink-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use registry::error::RegistryError;
use thiserror::Error;

/// QR link result type alias
pub type QrLinkResult<T> = Result<T, QrLinkError>;

/// QR link error variants
#[derive(Debug, Error)]
pub enum QrLinkError {
    /// Token failed verification (malformed or forged, never distinguished)
    #[error("Token verification failed")]
    TokenInvalid,

    /// No vehicle registered under the plate
    #[error("Vehicle not found")]
    VehicleNotFound,

    /// QR code rendering failed
    #[error("QR rendering failed: {0}")]
    QrRender(#[from] platform::qr::QrRenderError),

    /// Registry error
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl QrLinkError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            QrLinkError::TokenInvalid | QrLinkError::VehicleNotFound => StatusCode::NOT_FOUND,
            QrLinkError::QrRender(_) | QrLinkError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            QrLinkError::Registry(e) => e.status_code(),
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            QrLinkError::TokenInvalid | QrLinkError::VehicleNotFound => ErrorKind::NotFound,
            QrLinkError::QrRender(_) | QrLinkError::Internal(_) => ErrorKind::InternalServerError,
            QrLinkError::Registry(e) => e.kind(),
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            // An invalid token and an unknown plate answer with one body.
            // The verification surface never says which check failed.
            QrLinkError::TokenInvalid | QrLinkError::VehicleNotFound => {
                AppError::not_found("Not found")
            }
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            QrLinkError::QrRender(e) => {
                tracing::error!(error = %e, "QR rendering failed");
            }
            QrLinkError::Internal(msg) => {
                tracing::error!(message = %msg, "QR link internal error");
            }
            // Token contents are never logged
            QrLinkError::TokenInvalid => {
                tracing::debug!("Token verification failed");
            }
            _ => {
                tracing::debug!(error = %self, "QR link error");
            }
        }
    }
}

impl IntoResponse for QrLinkError {
    fn into_response(self) -> Response {
        match self {
            // Registry errors keep their own logging and status mapping
            QrLinkError::Registry(e) => e.into_response(),
            other => {
                other.log();
                other.to_app_error().into_response()
            }
        }
    }
}
