use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::cache::CacheError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Failed to generate cover letter: {0}")]
    Generation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid cached data")]
    CacheCorrupt,

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Service unhealthy: {0}")]
    Unhealthy(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<CacheError> for AppError {
    fn from(err: CacheError) -> Self {
        match err {
            CacheError::Corrupt(_) => AppError::CacheCorrupt,
            CacheError::Backend(e) => AppError::Cache(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Generation(cause) => {
                tracing::error!("Generation error: {cause}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "GENERATION_ERROR",
                    format!("Failed to generate cover letter: {cause}"),
                )
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::CacheCorrupt => {
                tracing::error!("Cache returned an undeserializable payload");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CACHE_ERROR",
                    "Invalid cached data".to_string(),
                )
            }
            AppError::Cache(cause) => {
                tracing::error!("Cache error: {cause}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CACHE_ERROR",
                    "A cache error occurred".to_string(),
                )
            }
            AppError::Unhealthy(cause) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_UNHEALTHY",
                format!("Service unhealthy: {cause}"),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
