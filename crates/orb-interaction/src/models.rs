//! Ordered OpenRouter model identifiers per flow.
//!
//! Each constant is a fallback chain: the first model is preferred, the rest
//! are tried in order when it fails. When a provider retires a model ID,
//! update the affected chain here and nothing else; the chains are the only
//! place model IDs appear.

/// Chain for the shake-driven ball answers (question, prediction, joke).
pub const BALL_MODELS: &[&str] = &[
    "google/gemini-2.0-flash-001",
    "stepfun/step-1-flash",
    "liquid/lfm-2.5-1.2b-instruct",
    "meta-llama/llama-3.1-8b-instruct:free",
];

/// Chain for the free-form chat flow.
pub const CHAT_MODELS: &[&str] = &[
    "google/gemini-2.0-flash-001",
    "google/gemini-2.0-flash-lite-preview-02-05",
    "stepfun/step-1-flash",
    "liquid/lfm-2.5-1.2b-instruct",
    "meta-llama/llama-3.1-8b-instruct:free",
];

/// Chain for the daily numerology reading.
pub const DAILY_MODELS: &[&str] = &[
    "google/gemini-2.0-flash-001",
    "stepfun/step-1-flash",
    "liquid/lfm-2.5-1.2b-instruct",
];
