//! HTTP routes for studio endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{health, run_task, StudioAppState};

/// Creates the studio router with all routes.
pub fn studio_routes(state: StudioAppState) -> Router {
    Router::new()
        // POST /api/ai
        .route("/api/ai", post(run_task))
        // GET /health
        .route("/health", get(health))
        .with_state(state)
}
