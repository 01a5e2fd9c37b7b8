//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and the outside world. Adapters implement these ports.
//!
//! ## AI Ports
//!
//! - `AIProvider` - Language model completions used by the studio gateway

mod ai_provider;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, Message, MessageRole,
    ProviderInfo, RequestMetadata,
};
