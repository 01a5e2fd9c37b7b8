//! Domain layer containing the suggestion engine and plan types.
//!
//! # Module Organization
//!
//! - `studio` - Deterministic generators for each wizard task
//! - `plan` - Communication plan state and step readiness

pub mod plan;
pub mod studio;
