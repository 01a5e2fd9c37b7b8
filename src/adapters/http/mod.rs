//! HTTP adapters - REST API implementations.

pub mod studio;

pub use studio::{studio_routes, StudioAppState};

use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Builds the CORS layer. No configured origins means any origin.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(origins)
    }
}

/// Full application router with tracing, CORS and request timeout layers.
pub fn app_router(state: StudioAppState, server: &ServerConfig) -> Router {
    studio_routes(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}
