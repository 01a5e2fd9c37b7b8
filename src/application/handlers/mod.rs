//! Application handlers.
//!
//! Orchestration between the HTTP surface, the AI provider port and the
//! deterministic generators.

pub mod studio;
