//! AI provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::ai::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// AI provider configuration
///
/// The API key is optional. Without one the studio runs entirely on its
/// deterministic generators.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Anthropic API key
    pub anthropic_api_key: Option<String>,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Completion token limit per call
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Budget for one model call in seconds; must stay below the server
    /// request timeout so a stalled model still yields a fallback answer
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The API key, if a non-empty one is set
    pub fn api_key(&self) -> Option<&str> {
        self.anthropic_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Check if model credentials are configured
    pub fn has_credentials(&self) -> bool {
        self.api_key().is_some()
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidAiTimeout);
        }
        if self.max_tokens == 0 {
            return Err(ValidationError::InvalidMaxTokens);
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            anthropic_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_timeout() -> u64 {
    20
}
