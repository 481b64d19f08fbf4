//! HTTP-facing error type for the studio API.
//!
//! Every handler returns [`ApiError`] on failure; its `IntoResponse` impl
//! renders the `{"success": false, "error": {...}}` envelope the studio
//! front end expects, with the status code matching the variant.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use botflow_store::StoreError;
use serde::Serialize;

/// The `error` object inside a failure envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorDetail {
    /// Stable machine-readable code ("NOT_FOUND", "BAD_REQUEST", ...).
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

/// Errors a handler can surface, each tied to one HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Unknown bot id (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Malformed request payload (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Storage or serialization failure (500).
    #[error("internal error: {0}")]
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ApiErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message: msg.clone(),
                },
            ),
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ApiErrorDetail {
                    code: "BAD_REQUEST".to_string(),
                    message: msg.clone(),
                },
            ),
            ApiError::InternalError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: msg.clone(),
                },
            ),
        };

        let body = serde_json::json!({
            "success": false,
            "error": detail,
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match &err {
            StoreError::BotNotFound(_) => ApiError::NotFound(err.to_string()),
            StoreError::Serialization(_)
            | StoreError::Sqlite(_)
            | StoreError::Migration(_)
            | StoreError::Integrity { .. } => ApiError::InternalError(err.to_string()),
        }
    }
}
