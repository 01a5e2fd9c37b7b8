//! StudioGateway - Model-first task execution with deterministic fallback.

use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};

use super::prompts::{user_prompt, SYSTEM_PROMPT};
use super::response::parse_reply;
use super::task::{StudioTask, TaskResult};
use super::GatewayError;
use crate::adapters::ai::{AnthropicConfig, AnthropicProvider};
use crate::config::AiConfig;
use crate::ports::{AIError, AIProvider, CompletionRequest, MessageRole, RequestMetadata};

/// Where a served result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultSource {
    Model,
    Fallback,
}

/// A result together with its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayOutcome {
    pub result: TaskResult,
    pub source: ResultSource,
}

/// Time allowed for one model call unless configured otherwise.
pub const DEFAULT_MODEL_TIMEOUT: Duration = Duration::from_secs(20);

/// Runs studio tasks against a language model when one is configured.
///
/// Without a provider every task is answered by the deterministic
/// generators and no network call is made. With a provider, any failure
/// (transport, status, timeout, missing JSON, wrong shape) is absorbed and
/// the deterministic answer is served instead.
///
/// The model timeout must stay below the HTTP request timeout, otherwise a
/// stalled model surfaces to the caller as a timeout instead of a fallback.
pub struct StudioGateway {
    provider: Option<Arc<dyn AIProvider>>,
    max_tokens: u32,
    model_timeout: Duration,
}

impl StudioGateway {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self {
            provider: Some(provider),
            max_tokens: 1024,
            model_timeout: DEFAULT_MODEL_TIMEOUT,
        }
    }

    /// Gateway with no model; every task uses the generators.
    pub fn offline() -> Self {
        Self {
            provider: None,
            max_tokens: 1024,
            model_timeout: DEFAULT_MODEL_TIMEOUT,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_model_timeout(mut self, model_timeout: Duration) -> Self {
        self.model_timeout = model_timeout;
        self
    }

    /// Builds the gateway from configuration. Offline when no key is set.
    pub fn from_config(config: &AiConfig) -> Result<Self, AIError> {
        let Some(api_key) = config.api_key() else {
            return Ok(Self::offline()
                .with_max_tokens(config.max_tokens)
                .with_model_timeout(config.timeout()));
        };

        let provider = AnthropicProvider::new(
            AnthropicConfig::new(api_key)
                .with_model(&config.model)
                .with_base_url(&config.base_url)
                .with_max_tokens(config.max_tokens)
                .with_timeout(config.timeout()),
        )?;

        Ok(Self::new(Arc::new(provider))
            .with_max_tokens(config.max_tokens)
            .with_model_timeout(config.timeout()))
    }

    /// True when a model provider is configured.
    pub fn has_model(&self) -> bool {
        self.provider.is_some()
    }

    /// Runs a task, always producing a result.
    pub async fn run(&self, task: &StudioTask) -> TaskResult {
        self.run_traced(task).await.result
    }

    /// Runs a task and reports whether the model or the fallback answered.
    pub async fn run_traced(&self, task: &StudioTask) -> GatewayOutcome {
        match self.attempt(task).await {
            Ok(result) => GatewayOutcome {
                result,
                source: ResultSource::Model,
            },
            Err(GatewayError::MissingCredentials) => GatewayOutcome {
                result: task.fallback(),
                source: ResultSource::Fallback,
            },
            Err(err) => {
                warn!(
                    task = %task.name(),
                    reason = err.kind(),
                    error = %err,
                    "model call failed, serving fallback"
                );
                GatewayOutcome {
                    result: task.fallback(),
                    source: ResultSource::Fallback,
                }
            }
        }
    }

    /// Single model attempt without fallback.
    pub async fn attempt(&self, task: &StudioTask) -> Result<TaskResult, GatewayError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or(GatewayError::MissingCredentials)?;

        let name = task.name();
        let request = CompletionRequest::new(RequestMetadata::for_task(name.as_str()))
            .with_system_prompt(SYSTEM_PROMPT)
            .with_max_tokens(self.max_tokens)
            .with_message(MessageRole::User, user_prompt(task));

        debug!(
            task = %name,
            trace_id = %request.metadata.trace_id,
            model = %provider.provider_info().model,
            "requesting model completion"
        );

        let response = timeout(self.model_timeout, provider.complete(request))
            .await
            .map_err(|_| AIError::Timeout(self.model_timeout))??;

        debug!(
            task = %name,
            model = %response.model,
            truncated = response.truncated,
            "model completion received"
        );
        parse_reply(name, &response.content)
    }
}
