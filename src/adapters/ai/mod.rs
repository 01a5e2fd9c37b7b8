//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port.
//!
//! ## Available Adapters
//!
//! - `AnthropicProvider` - Anthropic Messages API, single attempt per call
//! - `MockAIProvider` - Queued replies and injected errors for testing

mod anthropic_provider;
mod mock_provider;

pub use anthropic_provider::{AnthropicConfig, AnthropicProvider, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use mock_provider::{MockAIProvider, DEFAULT_MOCK_REPLY};
