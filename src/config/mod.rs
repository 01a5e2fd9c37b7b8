//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `STORY_STUDIO` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use story_studio::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Model configured: {}", config.ai.has_credentials());
//! ```

mod ai;
mod error;
mod server;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use server::ServerConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// offline configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Listener, logging and request timeout
    #[serde(default)]
    pub server: ServerConfig,

    /// Language model configuration
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `STORY_STUDIO` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `STORY_STUDIO__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `STORY_STUDIO__AI__ANTHROPIC_API_KEY=...` -> `ai.anthropic_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("STORY_STUDIO")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// A missing API key is not an error. The model timeout must be
    /// shorter than the request timeout.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        if self.ai.timeout_secs >= self.server.request_timeout_secs {
            return Err(ValidationError::AiTimeoutNotBelowRequestTimeout {
                ai_secs: self.ai.timeout_secs,
                request_secs: self.server.request_timeout_secs,
            });
        }
        Ok(())
    }
}
