//! Ordered provider fallback.
//!
//! The availability policy of the whole answer engine lives here: a provider
//! attempt fails on network error, non-success status or parse failure, and
//! every failure is swallowed locally and logged. Only total exhaustion is
//! visible to callers, as `None`.

use std::sync::Arc;

use futures::future::BoxFuture;
use tracing::debug;

use crate::agent::{AgentError, CompletionAgent, PromptMessage};

/// Runs labeled attempts in order and returns the first success.
///
/// There is no retry of an individual attempt: a failure moves immediately
/// to the next one. Exhaustion yields `None`.
pub async fn first_success<T>(
    attempts: Vec<(String, BoxFuture<'_, Result<T, AgentError>>)>,
) -> Option<T> {
    for (label, attempt) in attempts {
        match attempt.await {
            Ok(value) => return Some(value),
            Err(err) => debug!(provider = %label, error = %err, "provider attempt failed"),
        }
    }
    None
}

/// An ordered list of completion agents tried until one answers.
#[derive(Clone, Default)]
pub struct ProviderChain {
    agents: Vec<Arc<dyn CompletionAgent>>,
}

impl ProviderChain {
    pub fn new(agents: Vec<Arc<dyn CompletionAgent>>) -> Self {
        Self { agents }
    }

    pub fn push(&mut self, agent: Arc<dyn CompletionAgent>) {
        self.agents.push(agent);
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Attempts each agent in order with the same request.
    ///
    /// Returns `None` when every provider fails.
    pub async fn complete(&self, messages: &[PromptMessage], max_tokens: u32) -> Option<String> {
        let attempts = self
            .agents
            .iter()
            .map(|agent| {
                let label = agent.model_id().to_string();
                let attempt: BoxFuture<'_, Result<String, AgentError>> =
                    Box::pin(agent.complete(messages, max_tokens));
                (label, attempt)
            })
            .collect();
        first_success(attempts).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedAgent;

    #[tokio::test]
    async fn first_successful_provider_wins() {
        let first = ScriptedAgent::failing("a");
        let second = ScriptedAgent::ok("b", "answer");
        let third = ScriptedAgent::ok("c", "never reached");
        let chain = ProviderChain::new(vec![first.clone(), second.clone(), third.clone()]);

        let result = chain
            .complete(&[PromptMessage::user("q")], 50)
            .await;

        assert_eq!(result.as_deref(), Some("answer"));
        assert_eq!(first.calls(), 1);
        assert_eq!(second.calls(), 1);
        assert_eq!(third.calls(), 0);
    }

    #[tokio::test]
    async fn exhaustion_yields_none() {
        let a = ScriptedAgent::failing("a");
        let b = ScriptedAgent::failing("b");
        let chain = ProviderChain::new(vec![a.clone(), b.clone()]);

        let result = chain.complete(&[PromptMessage::user("q")], 50).await;

        assert_eq!(result, None);
        assert_eq!(a.calls(), 1);
        assert_eq!(b.calls(), 1);
    }

    #[tokio::test]
    async fn each_provider_is_attempted_at_most_once() {
        let only = ScriptedAgent::failing("solo");
        let chain = ProviderChain::new(vec![only.clone()]);

        chain.complete(&[PromptMessage::user("q")], 50).await;
        assert_eq!(only.calls(), 1);
    }

    #[tokio::test]
    async fn empty_chain_is_immediately_exhausted() {
        let chain = ProviderChain::default();
        assert_eq!(chain.complete(&[PromptMessage::user("q")], 50).await, None);
    }
}
