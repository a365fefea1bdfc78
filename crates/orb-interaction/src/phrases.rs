//! Local fallback oracle used when every provider is exhausted.

use rand::Rng;

use orb_core::session::Mode;

use crate::normalize::AnswerTokens;

/// Curated fortunes for the prediction mode.
pub const PREDICTIONS: &[&str] = &[
    "LUCK AWAITS YOU",
    "SOON EVERYTHING CHANGES",
    "BELIEVE IN YOUR STRENGTH",
    "TIME FOR DECISIONS",
    "EXPECT PLEASANT NEWS",
    "THE PATH IS OPEN BEFORE YOU",
    "YOUR HEART KNOWS THE WAY",
    "DO NOT FEAR CHANGE",
    "THE STARS ARE FAVORABLE",
    "THE DAY WILL BE BRIGHT",
    "ACT BOLDLY",
    "YOUR HOUR HAS COME",
    "ALL WILL TURN OUT FOR THE BEST",
    "TRUST YOUR INTUITION",
    "BE READY FOR THE NEW",
    "YOU CAN DO ANYTHING",
    "LISTEN TO YOUR HEART",
    "TIME FOR A MIRACLE",
    "SUCCESS IS ALREADY NEAR",
    "YOUR PATH IS TRUE",
];

/// Curated remarks for the joke mode.
pub const JOKES: &[&str] = &[
    "WHY WERE YOU EVEN BORN",
    "YOUR INTELLECT IS NATURE'S TYPO",
    "DO NOT EVEN HOPE, LOSER",
    "YOU ARE TODAY'S HEAD CLOWN",
    "MAYBE JUST STAY QUIET?",
    "YOUR MAXIMUM IS NOTHING",
];

/// Draws a locally generated answer for `mode`.
///
/// Question flips a fair coin between the answer tokens; prediction and joke
/// draw uniformly from their tables. The user always gets a plausible
/// answer, never a failure message.
pub fn local_answer(mode: Mode, tokens: &AnswerTokens) -> String {
    let mut rng = rand::thread_rng();
    match mode {
        Mode::Question => {
            if rng.gen_bool(0.5) {
                tokens.affirmative.clone()
            } else {
                tokens.negative.clone()
            }
        }
        Mode::Prediction => PREDICTIONS[rng.gen_range(0..PREDICTIONS.len())].to_string(),
        Mode::Joke => JOKES[rng.gen_range(0..JOKES.len())].to_string(),
        Mode::Daily | Mode::None => tokens.affirmative.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_draws_one_of_the_tokens() {
        let tokens = AnswerTokens::default();
        for _ in 0..20 {
            let answer = local_answer(Mode::Question, &tokens);
            assert!(answer == "YES" || answer == "NO");
        }
    }

    #[test]
    fn prediction_draws_from_the_table() {
        let tokens = AnswerTokens::default();
        for _ in 0..20 {
            let answer = local_answer(Mode::Prediction, &tokens);
            assert!(PREDICTIONS.contains(&answer.as_str()));
        }
    }

    #[test]
    fn joke_draws_from_the_table() {
        let tokens = AnswerTokens::default();
        for _ in 0..20 {
            let answer = local_answer(Mode::Joke, &tokens);
            assert!(JOKES.contains(&answer.as_str()));
        }
    }
}
