//! Studio task handling.
//!
//! `StudioGateway` turns a [`StudioTask`] into a [`TaskResult`], trying the
//! configured language model first and serving the deterministic generators
//! whenever the model is absent or its reply is unusable.

mod gateway;
mod prompts;
mod response;
mod task;

pub use gateway::{GatewayOutcome, ResultSource, StudioGateway, DEFAULT_MODEL_TIMEOUT};
pub use prompts::{truncate_chars, user_prompt, SYSTEM_PROMPT};
pub use response::{parse_reply, strip_code_fences};
pub use task::{StudioTask, TaskName, TaskResult};

use crate::ports::AIError;

/// Gateway errors. Only [`StudioGateway::attempt`] surfaces them;
/// [`StudioGateway::run`] absorbs all but unknown task names.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Unknown type: {0}")]
    UnknownTask(String),

    #[error("no model credentials configured")]
    MissingCredentials,

    #[error("model call failed: {0}")]
    Provider(#[from] AIError),

    #[error("malformed model response: {0}")]
    MalformedResponse(String),
}

impl GatewayError {
    /// Failure class, used as the `reason` log field.
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::UnknownTask(_) => "unknown_task",
            GatewayError::MissingCredentials => "missing_credentials",
            GatewayError::Provider(err) => err.kind(),
            GatewayError::MalformedResponse(_) => "malformed_response",
        }
    }
}
