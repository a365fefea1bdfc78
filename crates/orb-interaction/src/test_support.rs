//! Shared test doubles for the answer engine.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::agent::{AgentError, CompletionAgent, PromptMessage};

/// Agent that replies with a fixed string or always fails, counting calls.
pub(crate) struct ScriptedAgent {
    model: String,
    reply: Option<String>,
    calls: AtomicUsize,
}

impl ScriptedAgent {
    pub(crate) fn ok(model: &str, reply: &str) -> Arc<Self> {
        Arc::new(Self {
            model: model.to_string(),
            reply: Some(reply.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub(crate) fn failing(model: &str) -> Arc<Self> {
        Arc::new(Self {
            model: model.to_string(),
            reply: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionAgent for ScriptedAgent {
    fn model_id(&self) -> &str {
        &self.model
    }

    async fn complete(
        &self,
        _messages: &[PromptMessage],
        _max_tokens: u32,
    ) -> Result<String, AgentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(AgentError::Process {
                status_code: Some(503),
                message: "unavailable".to_string(),
                is_retryable: true,
            }),
        }
    }
}
