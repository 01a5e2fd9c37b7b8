//! HTTP handlers for studio endpoints.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;
use tracing::debug;

use crate::application::handlers::studio::{StudioGateway, StudioTask, TaskName};

use super::dto::{ErrorResponse, HealthResponse, TaskResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Studio API error that implements IntoResponse.
#[derive(Debug)]
pub enum StudioApiError {
    /// Missing, non-string or unrecognised `type`.
    UnknownType,
    BadRequest(String),
}

impl IntoResponse for StudioApiError {
    fn into_response(self) -> axum::response::Response {
        let error = match self {
            StudioApiError::UnknownType => ErrorResponse::unknown_type(),
            StudioApiError::BadRequest(msg) => ErrorResponse::new(msg),
        };
        (StatusCode::BAD_REQUEST, Json(error)).into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for studio endpoints.
#[derive(Clone)]
pub struct StudioAppState {
    pub gateway: Arc<StudioGateway>,
}

impl StudioAppState {
    pub fn new(gateway: StudioGateway) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// Parses `{ "type": ..., ...params }` into a task.
///
/// The type is resolved first so an unknown name is reported as such
/// rather than as a parameter error.
fn parse_task(body: Value) -> Result<StudioTask, StudioApiError> {
    let name: TaskName = body
        .as_object()
        .and_then(|obj| obj.get("type"))
        .and_then(Value::as_str)
        .ok_or(StudioApiError::UnknownType)?
        .parse()
        .map_err(|_| StudioApiError::UnknownType)?;

    serde_json::from_value(body)
        .map_err(|e| StudioApiError::BadRequest(format!("Invalid parameters for {}: {}", name, e)))
}

/// POST /api/ai
///
/// Runs one studio task and returns `{ "result": ... }`.
pub async fn run_task(
    State(state): State<StudioAppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<TaskResponse>, StudioApiError> {
    let Json(body) = body.map_err(|e| StudioApiError::BadRequest(e.body_text()))?;
    let task = parse_task(body)?;

    let outcome = state.gateway.run_traced(&task).await;
    debug!(task = %task.name(), source = ?outcome.source, "studio task served");

    Ok(Json(TaskResponse {
        result: outcome.result,
    }))
}

/// GET /health
pub async fn health(State(state): State<StudioAppState>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.gateway.has_model()))
}
