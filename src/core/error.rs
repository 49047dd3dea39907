//! Typed error handling at the HTTP boundary
//!
//! Store implementations return `anyhow::Result`; handlers map outcomes to
//! [`ApiError`], which renders a JSON `{code, message}` body with the
//! matching status code.
//!
//! Malformed request bodies never reach a handler: the `Json` extractor
//! rejects them before deserialization completes.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The error type surfaced by every handler.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Lookup by id found no matching document.
    #[error("{0}")]
    NotFound(&'static str),

    /// A creation payload failed the active validation policy.
    #[error("{0}")]
    Validation(String),

    /// The document store could not be reached or the query failed.
    ///
    /// Surfaced as-is with no retry or fallback.
    #[error("Storage error: {0}")]
    Storage(anyhow::Error),
}

/// JSON body attached to every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::Storage(_) => "STORAGE_ERROR",
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Storage(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Storage(err) = &self {
            tracing::error!("store operation failed: {err:#}");
        }

        let status = self.status_code();
        let body = Json(ErrorResponse {
            code: self.error_code(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// A specialized Result type for handler operations
pub type ApiResult<T> = Result<T, ApiError>;
