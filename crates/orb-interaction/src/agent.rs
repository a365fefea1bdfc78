//! Completion agent seam for remote text generation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One role/content pair in a chat-completions request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: String,
    pub content: String,
}

impl PromptMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Errors surfaced by a single provider attempt.
///
/// The fallback chain treats every variant the same way: log it and advance
/// to the next provider. Nothing here ever reaches the user.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The HTTP request failed or returned a non-success status.
    #[error("provider request failed: {message}")]
    Process {
        status_code: Option<u16>,
        message: String,
        is_retryable: bool,
    },

    /// The provider answered but the payload was unusable.
    #[error("provider returned an unusable response: {0}")]
    Response(String),

    /// The agent could not be constructed or executed.
    #[error("agent execution failed: {0}")]
    ExecutionFailed(String),
}

/// A remote text-generation backend addressed by model identifier.
#[async_trait]
pub trait CompletionAgent: Send + Sync {
    /// Model identifier sent to the remote API.
    fn model_id(&self) -> &str;

    /// Sends one chat-completions request and returns the generated text,
    /// trimmed.
    async fn complete(
        &self,
        messages: &[PromptMessage],
        max_tokens: u32,
    ) -> Result<String, AgentError>;
}
