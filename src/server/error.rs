//! Error types and response handling for the API server.
//!
//! Provides HTTP status code mapping and JSON error response generation.
//! Every error response carries a request id for log correlation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur while handling an API request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No blog post exists with the given id.
    #[error("Blog post {id} not found")]
    NotFound { id: i64 },

    /// A required field was missing or empty.
    #[error("Field '{field}' must not be empty")]
    Validation { field: &'static str },

    /// Missing or invalid credentials for an authenticated endpoint.
    #[error("Missing or invalid credentials")]
    Unauthorized,

    /// Storage-layer failure.
    #[error("Storage error: {0}")]
    Storage(#[source] StoreError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => ApiError::NotFound { id },
            StoreError::Validation { field } => ApiError::Validation { field },
            other => ApiError::Storage(other),
        }
    }
}

impl ApiError {
    /// Map error variant to appropriate HTTP status code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error type string for JSON responses.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "not_found",
            ApiError::Validation { .. } => "validation_error",
            ApiError::Unauthorized => "unauthorized",
            ApiError::Storage(_) => "storage_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let request_id = uuid::Uuid::new_v4().to_string();
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(request_id = %request_id, "Request failed: {}", self);
        } else {
            tracing::debug!(request_id = %request_id, "Request rejected: {}", self);
        }

        let body = serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
                "request_id": request_id
            }
        });

        (status, Json(body)).into_response()
    }
}
