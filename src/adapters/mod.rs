//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `ai` - Language model providers
//! - `http` - Axum REST surface

pub mod ai;
pub mod http;
