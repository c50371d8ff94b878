//! What views may show: word slots and keyboard letter status.

use super::loss::is_lost;
use crate::config::GameConfig;
use crate::state::GameState;
use crate::types::{LetterStatus, Slot};
use tracing::instrument;

/// Display value for a letter of the word: shown if guessed, or if the game
/// is lost (a loss reveals the whole word).
#[instrument(level = "trace", skip(state, config))]
pub fn reveal(state: &GameState, config: &GameConfig, letter: char) -> Option<char> {
    (state.has_guessed(letter) || is_lost(state, config)).then_some(letter)
}

/// One slot per position of the word.
#[instrument(level = "trace", skip(state, config))]
pub fn slots(state: &GameState, config: &GameConfig) -> Vec<Slot> {
    let lost = is_lost(state, config);
    state
        .target_word()
        .chars()
        .map(|letter| {
            if state.has_guessed(letter) {
                Slot::Guessed(letter)
            } else if lost {
                Slot::Missed(letter)
            } else {
                Slot::Hidden
            }
        })
        .collect()
}

/// Status of a keyboard letter.
#[instrument(level = "trace", skip(state))]
pub fn letter_status(state: &GameState, letter: char) -> LetterStatus {
    match (state.has_guessed(letter), state.word_contains(letter)) {
        (false, _) => LetterStatus::Unguessed,
        (true, true) => LetterStatus::Correct,
        (true, false) => LetterStatus::Wrong,
    }
}
