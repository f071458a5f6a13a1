use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::state::AppState;

/// GET /health
///
/// Probes the cache with a PING. The generation provider is reported
/// statically as "configured" — no live probe, to avoid burning quota.
pub async fn health_handler(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    state
        .cache
        .ping()
        .await
        .map_err(|e| AppError::Unhealthy(e.to_string()))?;

    Ok(Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "services": {
            "redis": "connected",
            "openai": "configured"
        }
    })))
}
