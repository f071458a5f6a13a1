pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::letters::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/generate", post(handlers::handle_generate))
        .route("/cover-letter/:id", get(handlers::handle_get_letter))
        .with_state(state)
}
