//! Studio HTTP adapter module.
//!
//! Exposes the task gateway as `POST /api/ai` plus a health check.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ErrorResponse, HealthResponse, TaskResponse};
pub use handlers::{StudioApiError, StudioAppState};
pub use routes::studio_routes;
