//! Per-mode prompt contracts.

use chrono::{DateTime, Local, NaiveDate};
use orb_core::input::BirthProfile;
use orb_core::session::Mode;

/// Builds the single-shot prompt for a ball answer.
///
/// Returns `None` for modes the ball resolver does not handle remotely:
/// daily readings have their own prompt, and no mode means no request.
pub fn ball_prompt(mode: Mode, question: &str) -> Option<String> {
    match mode {
        Mode::Question => Some(format!(
            "You are a Magic Ball. You are asked: '{question}'. Your task is to answer \
             with STRICTLY one word: YES or NO. Even if it is a statement, treat it as \
             a question. Only if the input is complete nonsense, answer UNRECOGNIZED."
        )),
        Mode::Prediction => Some(
            "Give ONE universal prediction (STRICTLY 4-7 words) about success, the inner \
             voice, the stars, change, opportunity and luck. Text only, no options, no \
             explanations."
                .to_string(),
        ),
        Mode::Joke => Some(
            "Mock the user SARCASTICALLY and HARSHLY (5-7 words). Be cynical and \
             sharp-tongued."
                .to_string(),
        ),
        Mode::Daily | Mode::None => None,
    }
}

/// Builds the daily numerology prompt from a complete birth profile.
pub fn daily_prompt(profile: &BirthProfile, today: NaiveDate) -> String {
    format!(
        "You are a professional numerologist and astrologer. User data: born {} at {}, \
         city {}. Today: {}. Give a short daily horoscope reading (250-300 characters). \
         Be concise, no filler, essence only.",
        profile.date,
        profile.time,
        profile.city,
        today.format("%A, %-d %B %Y"),
    )
}

/// Builds the system message for the free-form chat flow.
pub fn chat_system_prompt(now: DateTime<Local>) -> String {
    format!(
        "You are a wise AI agent. Today: {}. Answer briefly.",
        now.format("%A, %-d %B %Y, %H:%M"),
    )
}
