//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("AI timeout must be greater than zero")]
    InvalidAiTimeout,

    #[error("AI max_tokens must be greater than zero")]
    InvalidMaxTokens,

    #[error("AI base URL must start with http:// or https://")]
    InvalidBaseUrl,

    #[error("AI timeout ({ai_secs}s) must be shorter than the request timeout ({request_secs}s)")]
    AiTimeoutNotBelowRequestTimeout { ai_secs: u64, request_secs: u64 },
}
