//! Anthropic Provider - Implementation of AIProvider for Anthropic's Messages API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = AnthropicConfig::new(api_key)
//!     .with_model("claude-opus-4-5-20251101")
//!     .with_max_tokens(1024);
//!
//! let provider = AnthropicProvider::new(config)?;
//! ```
//!
//! Each call is a single attempt. Failures are reported to the caller, which
//! decides what to serve instead.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, MessageRole, ProviderInfo,
};

/// Default model for studio completions.
pub const DEFAULT_MODEL: &str = "claude-opus-4-5-20251101";

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Anthropic API version header value.
const ANTHROPIC_API_VERSION: &str = "2023-06-01";

const CONTEXT_WINDOW_TOKENS: u32 = 200_000;

/// Configuration for the Anthropic provider.
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    api_key: Secret<String>,
    pub model: String,
    pub base_url: String,
    /// Used when the request does not set its own limit.
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl AnthropicConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_tokens: 1024,
            timeout: Duration::from_secs(20),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Anthropic API provider implementation.
pub struct AnthropicProvider {
    config: AnthropicConfig,
    client: Client,
}

impl AnthropicProvider {
    /// Creates a new Anthropic provider with the given configuration.
    pub fn new(config: AnthropicConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::InvalidRequest(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.config.base_url.trim_end_matches('/'))
    }

    /// Converts our request to Anthropic's format.
    fn to_anthropic_request(&self, request: &CompletionRequest) -> AnthropicRequest {
        // The system prompt travels in its own field, never as a message.
        let messages = request
            .messages
            .iter()
            .filter_map(|msg| {
                let role = match msg.role {
                    MessageRole::System => return None,
                    MessageRole::User => "user",
                    MessageRole::Assistant => "assistant",
                };
                Some(AnthropicMessage {
                    role: role.to_string(),
                    content: msg.content.clone(),
                })
            })
            .collect();

        AnthropicRequest {
            model: self.config.model.clone(),
            messages,
            system: request.system_prompt.clone(),
            max_tokens: request.max_tokens.unwrap_or(self.config.max_tokens),
        }
    }

    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, AIError> {
        let anthropic_request = self.to_anthropic_request(request);

        self.client
            .post(self.messages_url())
            .header("x-api-key", self.config.api_key())
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .header("Content-Type", "application/json")
            .json(&anthropic_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AIError::Timeout(self.config.timeout)
                } else if e.is_connect() {
                    AIError::network(format!("Connection failed: {}", e))
                } else {
                    AIError::network(e.to_string())
                }
            })
    }

    /// Maps non-success statuses to port errors.
    async fn handle_response_status(response: Response) -> Result<Response, AIError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        Err(Self::status_error(status.as_u16(), error_body))
    }

    fn status_error(status: u16, error_body: String) -> AIError {
        match status {
            401 => AIError::AuthenticationFailed,
            429 => AIError::rate_limited(Self::parse_retry_after(&error_body)),
            400 => {
                if error_body.contains("prompt is too long") {
                    AIError::ContextTooLong {
                        max_tokens: CONTEXT_WINDOW_TOKENS,
                    }
                } else {
                    AIError::InvalidRequest(error_body)
                }
            }
            500..=599 => AIError::unavailable(format!("Server error {}: {}", status, error_body)),
            _ => AIError::network(format!("Unexpected status {}: {}", status, error_body)),
        }
    }

    /// Parses "try again in Ns" from an error body; 60 seconds otherwise.
    fn parse_retry_after(error_body: &str) -> u32 {
        serde_json::from_str::<serde_json::Value>(error_body)
            .ok()
            .and_then(|parsed| {
                let message = parsed.get("error")?.get("message")?.as_str()?.to_string();
                let rest = &message[message.find("try again in ")? + 13..];
                let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
                digits.parse::<u32>().ok()
            })
            .unwrap_or(60)
    }

    fn into_completion(response: AnthropicResponse) -> CompletionResponse {
        let content = response
            .content
            .into_iter()
            .filter(|block| block.block_type == "text")
            .filter_map(|block| block.text)
            .collect::<Vec<_>>()
            .join("");

        CompletionResponse {
            content,
            model: response.model,
            truncated: response.stop_reason.as_deref() == Some("max_tokens"),
        }
    }
}

#[async_trait]
impl AIProvider for AnthropicProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let response = self.send_request(&request).await?;
        let response = Self::handle_response_status(response).await?;

        let anthropic_response: AnthropicResponse = response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

        Ok(Self::into_completion(anthropic_response))
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("anthropic", &self.config.model)
    }
}

// ----- Anthropic API Types -----

#[derive(Debug, Serialize)]
struct AnthropicRequest {
    model: String,
    messages: Vec<AnthropicMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct AnthropicMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    model: String,
    content: Vec<ContentBlock>,
    stop_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::RequestMetadata;

    fn provider() -> AnthropicProvider {
        AnthropicProvider::new(AnthropicConfig::new("test-key")).unwrap()
    }

    #[test]
    fn config_builder_works() {
        let config = AnthropicConfig::new("test-key")
            .with_model("claude-3-haiku-20240307")
            .with_base_url("https://custom.api.com")
            .with_max_tokens(512)
            .with_timeout(Duration::from_secs(30));

        assert_eq!(config.model, "claude-3-haiku-20240307");
        assert_eq!(config.base_url, "https://custom.api.com");
        assert_eq!(config.max_tokens, 512);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.api_key(), "test-key");
    }

    #[test]
    fn api_key_is_redacted_in_debug_output() {
        let config = AnthropicConfig::new("sk-ant-secret");
        assert!(!format!("{:?}", config).contains("sk-ant-secret"));
    }

    #[test]
    fn request_uses_system_field_and_default_max_tokens() {
        let request = CompletionRequest::new(RequestMetadata::for_task("summariseDocument"))
            .with_system_prompt("persona")
            .with_message(MessageRole::System, "ignored")
            .with_message(MessageRole::User, "Summarise this");

        let body = provider().to_anthropic_request(&request);
        assert_eq!(body.model, DEFAULT_MODEL);
        assert_eq!(body.max_tokens, 1024);
        assert_eq!(body.system.as_deref(), Some("persona"));
        assert_eq!(body.messages.len(), 1);
        assert_eq!(body.messages[0].role, "user");
    }

    #[test]
    fn status_codes_map_to_error_classes() {
        assert!(matches!(
            AnthropicProvider::status_error(401, String::new()),
            AIError::AuthenticationFailed
        ));
        assert!(matches!(
            AnthropicProvider::status_error(429, String::new()),
            AIError::RateLimited { retry_after_secs: 60 }
        ));
        assert!(matches!(
            AnthropicProvider::status_error(400, "prompt is too long".to_string()),
            AIError::ContextTooLong { .. }
        ));
        assert!(matches!(
            AnthropicProvider::status_error(400, "bad field".to_string()),
            AIError::InvalidRequest(_)
        ));
        assert!(matches!(
            AnthropicProvider::status_error(529, String::new()),
            AIError::Unavailable { .. }
        ));
    }

    #[test]
    fn parse_retry_after_reads_message() {
        let error = r#"{"error":{"message":"Rate limited, try again in 12s"}}"#;
        assert_eq!(AnthropicProvider::parse_retry_after(error), 12);

        let error = r#"{"error":{"message":"Rate limit exceeded"}}"#;
        assert_eq!(AnthropicProvider::parse_retry_after(error), 60);
    }

    #[test]
    fn completion_joins_text_blocks() {
        let response: AnthropicResponse = serde_json::from_str(
            r#"{
                "model": "claude-opus-4-5-20251101",
                "content": [
                    {"type": "text", "text": "{\"summary\":"},
                    {"type": "tool_use"},
                    {"type": "text", "text": "\"ok\"}"}
                ],
                "stop_reason": "end_turn",
                "usage": {"input_tokens": 10, "output_tokens": 4}
            }"#,
        )
        .unwrap();

        let completion = AnthropicProvider::into_completion(response);
        assert_eq!(completion.content, r#"{"summary":"ok"}"#);
        assert!(!completion.truncated);
    }

    #[test]
    fn max_tokens_stop_marks_reply_truncated() {
        let response: AnthropicResponse = serde_json::from_str(
            r#"{
                "model": "claude-opus-4-5-20251101",
                "content": [{"type": "text", "text": "{\"summary\": \"cut"}],
                "stop_reason": "max_tokens"
            }"#,
        )
        .unwrap();

        assert!(AnthropicProvider::into_completion(response).truncated);
    }

    #[test]
    fn provider_info_reports_model() {
        let info = provider().provider_info();
        assert_eq!(info.name, "anthropic");
        assert_eq!(info.model, DEFAULT_MODEL);
    }

    #[tokio::test]
    async fn unreachable_host_is_a_single_network_failure() {
        let config = AnthropicConfig::new("test-key")
            .with_base_url("http://127.0.0.1:1")
            .with_timeout(Duration::from_secs(2));
        let provider = AnthropicProvider::new(config).unwrap();

        let request = CompletionRequest::new(RequestMetadata::for_task("summariseDocument"))
            .with_message(MessageRole::User, "hello");
        let err = provider.complete(request).await.unwrap_err();

        assert!(matches!(
            err,
            AIError::Network(_) | AIError::Timeout(_)
        ));
    }
}
