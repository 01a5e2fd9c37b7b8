//! AI Provider Port - the seam between the studio gateway and a language model.
//!
//! The gateway builds one [`CompletionRequest`] per task and only ever needs
//! the reply text back. Everything vendor specific (headers, wire format,
//! status codes) stays in the adapter.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// A language model that can answer a single prompt.
#[async_trait]
pub trait AIProvider: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError>;

    /// Name and model identifier, for logs and health output.
    fn provider_info(&self) -> ProviderInfo;
}

/// One prompt for the model: a system persona plus conversation turns.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub messages: Vec<Message>,
    pub system_prompt: Option<String>,
    /// Completion limit; the adapter's own default applies when unset.
    pub max_tokens: Option<u32>,
    pub metadata: RequestMetadata,
}

impl CompletionRequest {
    pub fn new(metadata: RequestMetadata) -> Self {
        Self {
            messages: Vec::new(),
            system_prompt: None,
            max_tokens: None,
            metadata,
        }
    }

    pub fn with_message(mut self, role: MessageRole, content: impl Into<String>) -> Self {
        self.messages.push(Message {
            role,
            content: content.into(),
        });
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = Some(max);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// Identifies a single model attempt in the logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestMetadata {
    /// Wire name of the studio task being served.
    pub task: String,
    pub trace_id: String,
}

impl RequestMetadata {
    /// Metadata with a fresh v4 trace id.
    pub fn for_task(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            trace_id: Uuid::new_v4().to_string(),
        }
    }
}

/// Reply text from the model.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    pub content: String,
    /// Model that actually answered.
    pub model: String,
    /// The reply hit the token limit and is probably cut off mid-JSON.
    pub truncated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderInfo {
    pub name: String,
    pub model: String,
}

impl ProviderInfo {
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Why a model call produced no usable reply text.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AIError {
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },

    #[error("prompt exceeds the {max_tokens} token context window")]
    ContextTooLong { max_tokens: u32 },

    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// API key rejected.
    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("network error: {0}")]
    Network(String),

    /// Provider body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("no reply within {0:?}")]
    Timeout(Duration),
}

impl AIError {
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Failure class, used as the `reason` log field.
    pub fn kind(&self) -> &'static str {
        match self {
            AIError::RateLimited { .. } => "rate_limited",
            AIError::ContextTooLong { .. } => "context_too_long",
            AIError::Unavailable(_) => "unavailable",
            AIError::AuthenticationFailed => "authentication_failed",
            AIError::Network(_) => "network",
            AIError::Parse(_) => "parse",
            AIError::InvalidRequest(_) => "invalid_request",
            AIError::Timeout(_) => "timeout",
        }
    }
}
