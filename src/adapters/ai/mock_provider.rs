//! Mock AI Provider for testing.
//!
//! Lets the gateway's model path run without a real API: queue raw model
//! replies (well-formed, fenced or malformed JSON) or inject any
//! [`AIError`], then inspect the recorded requests.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_response(r#"{"summary": "From the model"}"#)
//!     .with_error(AIError::AuthenticationFailed);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo};

/// Reply served when the queue is empty. Not valid JSON for any task.
pub const DEFAULT_MOCK_REPLY: &str = "Mock response";

const MOCK_MODEL: &str = "mock-model-1";

/// Mock AI provider for testing.
#[derive(Debug, Clone)]
pub struct MockAIProvider {
    /// Queued responses, consumed in order.
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Simulated latency per request.
    delay: Duration,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
enum MockResponse {
    Reply(String),
    Error(AIError),
}

impl Default for MockAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockAIProvider {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a successful reply with the given raw text.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        locked(&self.responses).push_back(MockResponse::Reply(content.into()));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: AIError) -> Self {
        locked(&self.responses).push_back(MockResponse::Error(error));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        locked(&self.calls).len()
    }

    /// Returns all recorded requests.
    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        locked(&self.calls).clone()
    }

    fn next_response(&self) -> MockResponse {
        locked(&self.responses)
            .pop_front()
            .unwrap_or_else(|| MockResponse::Reply(DEFAULT_MOCK_REPLY.to_string()))
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        locked(&self.calls).push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response() {
            MockResponse::Reply(content) => Ok(CompletionResponse {
                content,
                model: MOCK_MODEL.to_string(),
                truncated: false,
            }),
            MockResponse::Error(err) => Err(err),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", MOCK_MODEL)
    }
}
