//! Result resolution seam between the state machine and the answer engine.

use async_trait::async_trait;

use crate::session::mode::Mode;

/// Resolves the text shown when an interaction cycle completes.
///
/// Implementations must always yield text: remote provider failures are
/// absorbed behind this seam and replaced with locally generated fallbacks,
/// so a completed cycle never surfaces a technical error.
#[async_trait]
pub trait ResultResolver: Send + Sync {
    /// Resolves the result for `mode`, given the captured voice input (empty
    /// for modes without one).
    async fn resolve(&self, mode: Mode, user_input: &str) -> String;
}
