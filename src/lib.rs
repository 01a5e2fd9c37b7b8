//! Story Studio - Communication plan coaching service
//!
//! This crate helps researchers turn their work into a communication plan:
//! a behaviour-change goal, a should statement, three key messages in the
//! Problem / Inspiration / Payoff structure, and a story, statistic and
//! soundbite for each message. A language model drafts suggestions when one
//! is configured; deterministic generators answer otherwise.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
