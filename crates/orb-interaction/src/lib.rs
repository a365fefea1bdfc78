//! Answer engine for the magic ball: prompt contracts, the OpenRouter
//! provider chain with ordered fallback, the local phrase oracle, and the
//! chat and daily reading flows built on top of them.

pub mod agent;
pub mod chat;
pub mod config;
pub mod daily;
pub mod fallback;
pub mod models;
pub mod normalize;
pub mod openrouter_api_agent;
pub mod phrases;
pub mod prompts;
pub mod resolver;

#[cfg(test)]
pub(crate) mod test_support;

use std::sync::Arc;

pub use agent::{AgentError, CompletionAgent, PromptMessage};
pub use chat::{CONNECTION_LOST, ChatService};
pub use daily::{DailyReadingService, STARS_UNCLEAR};
pub use fallback::ProviderChain;
pub use normalize::{AnswerTokens, UNRECOGNIZED};
pub use openrouter_api_agent::OpenRouterApiAgent;
pub use resolver::ResponseResolver;

/// Builds a provider chain of [`OpenRouterApiAgent`]s for the given model
/// IDs, configured from the environment.
///
/// # Errors
///
/// Returns the first construction failure, typically a missing API key.
pub fn chain_from_env(models: &[&str]) -> Result<ProviderChain, AgentError> {
    let mut chain = ProviderChain::default();
    for model in models {
        let agent = OpenRouterApiAgent::try_from_env(*model)?;
        chain.push(Arc::new(agent));
    }
    Ok(chain)
}
