//! Error types for the API server.
//!
//! ## Error Classes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Client-Facing Error Classes                         │
//! │                                                                         │
//! │  ValidationError (dukaan-core) ──► 400 Bad Request                     │
//! │  DbError::NotFound (dukaan-db) ──► 404 Not Found ("<Entity> not found")│
//! │  Everything else               ──► 500 Internal Server Error           │
//! │                                                                         │
//! │  Body is always: { "error": "<message>" }                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{error, warn};

use dukaan_core::ValidationError;
use dukaan_db::DbError;

/// API errors. Exactly three client-visible classes.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Input failed validation. The underlying message is passed through.
    #[error("{0}")]
    Validation(String),

    /// Record lookup failed. Message is always "<Entity> not found".
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    /// Anything else (database unavailability, serialization faults, ...).
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Creates a NotFound error for a given entity type.
    pub fn not_found(entity: &'static str) -> Self {
        ApiError::NotFound { entity }
    }
}

/// A body that fails to deserialize (bad JSON, wrong type, unknown enum
/// value) is a validation failure, same class as a missing field.
impl From<axum::extract::rejection::JsonRejection> for ApiError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity } => ApiError::NotFound { entity },
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(msg) => {
                warn!(%msg, "Request rejected by validation");
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal(msg) => {
                error!(%msg, "Internal error while handling request");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Result type for request handlers.
pub type ApiResult<T> = Result<T, ApiError>;
