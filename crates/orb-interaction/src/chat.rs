//! Free-form chat flow over the provider chain.

use chrono::{DateTime, Local};
use tracing::debug;

use orb_core::history::ChatLog;

use crate::agent::PromptMessage;
use crate::fallback::ProviderChain;
use crate::prompts;

const CHAT_MAX_TOKENS: u32 = 250;

/// Shown in place of a reply when every provider fails.
pub const CONNECTION_LOST: &str = "Connection lost... Try again later.";

/// Stateless chat responder; the conversation itself lives in a [`ChatLog`]
/// owned by the caller.
pub struct ChatService {
    chain: ProviderChain,
}

impl ChatService {
    pub fn new(chain: ProviderChain) -> Self {
        Self { chain }
    }

    /// Produces the agent reply for the current state of `log`.
    ///
    /// The caller appends the user message to the log before calling and the
    /// returned reply after. Failure is represented in-band as
    /// [`CONNECTION_LOST`] so the conversation can continue.
    pub async fn respond(&self, log: &ChatLog, now: DateTime<Local>) -> String {
        let messages = build_messages(log, now);
        match self.chain.complete(&messages, CHAT_MAX_TOKENS).await {
            Some(reply) => reply.trim().to_string(),
            None => {
                debug!("chat chain exhausted");
                CONNECTION_LOST.to_string()
            }
        }
    }
}

/// Maps the recent window of `log` onto provider roles, behind the dated
/// system message.
fn build_messages(log: &ChatLog, now: DateTime<Local>) -> Vec<PromptMessage> {
    let mut messages = Vec::with_capacity(log.recent_window().len() + 1);
    messages.push(PromptMessage::system(prompts::chat_system_prompt(now)));
    for entry in log.recent_window() {
        if entry.is_from_user {
            messages.push(PromptMessage::user(&entry.text));
        } else {
            messages.push(PromptMessage::assistant(&entry.text));
        }
    }
    messages
}
