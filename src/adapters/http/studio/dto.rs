//! HTTP DTOs for studio endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::studio::TaskResult;

/// Message returned for unrecognised task types.
pub const UNKNOWN_TYPE: &str = "Unknown type";

/// Successful task response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResponse {
    pub result: TaskResult,
}

/// Error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    pub fn unknown_type() -> Self {
        Self::new(UNKNOWN_TYPE)
    }
}

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Whether model credentials are configured.
    pub model: bool,
}

impl HealthResponse {
    pub fn ok(model: bool) -> Self {
        Self {
            status: "ok".to_string(),
            model,
        }
    }
}
