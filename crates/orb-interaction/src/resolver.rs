//! Mode-aware response resolution with two-tier fallback.

use async_trait::async_trait;
use tracing::debug;

use orb_core::resolver::ResultResolver;
use orb_core::session::Mode;

use crate::agent::PromptMessage;
use crate::fallback::ProviderChain;
use crate::normalize::{AnswerTokens, UNRECOGNIZED};
use crate::{phrases, prompts};

/// Questions shorter than this never reach a provider.
pub const MIN_QUESTION_LEN: usize = 3;

const ANSWER_MAX_TOKENS: u32 = 50;

/// Resolves ball answers: remote provider chain first, local oracle when
/// every provider fails.
///
/// This two-tier design trades response quality for availability: the
/// user-visible interaction always completes with some text.
pub struct ResponseResolver {
    chain: ProviderChain,
    tokens: AnswerTokens,
}

impl ResponseResolver {
    pub fn new(chain: ProviderChain) -> Self {
        Self {
            chain,
            tokens: AnswerTokens::default(),
        }
    }

    /// Overrides the yes/no tokens after construction.
    pub fn with_tokens(mut self, tokens: AnswerTokens) -> Self {
        self.tokens = tokens;
        self
    }

    /// Remote tier: first provider success, normalized per the mode
    /// contract. `None` means no provider answered or the mode has no
    /// remote contract at all.
    async fn remote_answer(&self, mode: Mode, question: &str) -> Option<String> {
        let prompt = prompts::ball_prompt(mode, question)?;
        let messages = [PromptMessage::user(prompt)];
        let raw = self.chain.complete(&messages, ANSWER_MAX_TOKENS).await?;
        let upper = raw.trim().to_uppercase();
        Some(match mode {
            Mode::Question => self.tokens.classify(&upper),
            _ => upper,
        })
    }
}

#[async_trait]
impl ResultResolver for ResponseResolver {
    async fn resolve(&self, mode: Mode, user_input: &str) -> String {
        if mode == Mode::Question
            && (user_input.trim().is_empty() || user_input.chars().count() < MIN_QUESTION_LEN)
        {
            return UNRECOGNIZED.to_string();
        }

        match self.remote_answer(mode, user_input).await {
            Some(text) => text,
            None => {
                debug!(%mode, "no remote result, drawing from the local oracle");
                phrases::local_answer(mode, &self.tokens)
            }
        }
    }
}
