//! Registry Error Types
//!
//! This module provides registry-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_object::plate::PlateError;

/// Registry-specific result type alias
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry-specific error variants
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No vehicle registered under the requested plate
    #[error("Vehicle not found")]
    VehicleNotFound,

    /// Plate already registered to another vehicle
    #[error("Plate is already registered")]
    PlateTaken,

    /// Marchamo or revision record not found
    #[error("Record not found")]
    RecordNotFound,

    /// Input validation error
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RegistryError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RegistryError::VehicleNotFound | RegistryError::RecordNotFound => {
                StatusCode::NOT_FOUND
            }
            RegistryError::PlateTaken => StatusCode::CONFLICT,
            RegistryError::Validation(_) => StatusCode::BAD_REQUEST,
            RegistryError::Database(_) | RegistryError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::VehicleNotFound | RegistryError::RecordNotFound => ErrorKind::NotFound,
            RegistryError::PlateTaken => ErrorKind::Conflict,
            RegistryError::Validation(_) => ErrorKind::BadRequest,
            RegistryError::Database(_) | RegistryError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            RegistryError::Database(e) => {
                tracing::error!(error = %e, "Registry database error");
            }
            RegistryError::Internal(msg) => {
                tracing::error!(message = %msg, "Registry internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Registry error");
            }
        }
    }
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        self.log();
        match self {
            // Database errors go through the kernel conversion so constraint
            // violations keep their client-facing status codes.
            RegistryError::Database(e) => AppError::from(e).into_response(),
            other => other.to_app_error().into_response(),
        }
    }
}

impl From<PlateError> for RegistryError {
    fn from(err: PlateError) -> Self {
        RegistryError::Validation(err.to_string())
    }
}
