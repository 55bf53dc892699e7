pub mod middleware;
pub mod protocol;
pub mod rest;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub use middleware::cors_layer;
pub use rest::{analyze_message_handler, health_handler};
pub use state::AppState;

/// Builds the API routes over the given state.
pub fn router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/analysis/message", post(analyze_message_handler))
        .route("/api/v1/analysis/health", get(health_handler))
        .with_state(app_state)
}
