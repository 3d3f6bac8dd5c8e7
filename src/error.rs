use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::ValidationErrors;

#[cfg(feature = "catalog-import")]
use crate::dao::catalog::CatalogError;
use crate::dao::storage::StorageError;

/// Errors that can occur in service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage reported a failure; the kind decides the HTTP status.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// Invalid input provided by the client.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The third-party catalog could not be queried.
    #[cfg(feature = "catalog-import")]
    #[error("catalog unavailable")]
    Catalog(#[source] CatalogError),
    /// Feature disabled or not configured.
    #[error("unavailable: {0}")]
    Unavailable(String),
}

#[cfg(feature = "catalog-import")]
impl From<CatalogError> for ServiceError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::MissingApiKey => {
                ServiceError::Unavailable("catalog API key is not configured".into())
            }
            other => ServiceError::Catalog(other),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        AppError::BadRequest(format!("validation failed: {}", err))
    }
}

/// Application-level errors that are converted to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request with invalid input.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Unauthorized access attempt.
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    /// Requested resource not found.
    #[error("not found: {0}")]
    NotFound(String),
    /// Conflict with current state.
    #[error("conflict: {0}")]
    Conflict(String),
    /// Service unavailable or degraded.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Storage(StorageError::Duplicate { name, platform }) => {
                AppError::Conflict(format!(
                    "a game named `{name}` already exists for platform `{platform}`"
                ))
            }
            ServiceError::Storage(StorageError::NotFound { id }) => {
                AppError::NotFound(format!("game `{id}` not found"))
            }
            ServiceError::Storage(source @ StorageError::Backend { .. }) => {
                error!(error = ?source, "database operation failed");
                AppError::Internal("database operation failed".into())
            }
            ServiceError::InvalidInput(message) => AppError::BadRequest(message),
            #[cfg(feature = "catalog-import")]
            ServiceError::Catalog(source) => {
                error!(error = ?source, "catalog request failed");
                AppError::ServiceUnavailable(source.to_string())
            }
            ServiceError::Unavailable(message) => AppError::ServiceUnavailable(message),
        }
    }
}

/// JSON body returned alongside every error status.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human readable description of the failure.
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let payload = Json(ErrorBody {
            message: self.to_string(),
        });

        (status, payload).into_response()
    }
}
