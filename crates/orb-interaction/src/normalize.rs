//! Answer normalization for the strict yes/no contract.

/// Sentinel returned when a question cannot be answered yes or no.
pub const UNRECOGNIZED: &str = "UNRECOGNIZED";

/// Affirmative and negative tokens tested against normalized model output.
///
/// Token containment, not equality: models wrap the verdict in punctuation
/// and filler more often than not. The tokens are configurable so a host can
/// localize the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerTokens {
    pub affirmative: String,
    pub negative: String,
}

impl Default for AnswerTokens {
    fn default() -> Self {
        Self {
            affirmative: "YES".to_string(),
            negative: "NO".to_string(),
        }
    }
}

impl AnswerTokens {
    /// Maps raw model output onto the yes/no contract.
    ///
    /// The output is trimmed and upper-cased, then tested for the
    /// affirmative token first. Anything containing neither token maps to
    /// the [`UNRECOGNIZED`] sentinel.
    pub fn classify(&self, raw: &str) -> String {
        let upper = raw.trim().to_uppercase();
        if upper.contains(&self.affirmative) {
            self.affirmative.clone()
        } else if upper.contains(&self.negative) {
            self.negative.clone()
        } else {
            UNRECOGNIZED.to_string()
        }
    }
}
