//! Derived-state rules.
//!
//! Pure functions of state and configuration, recomputed on every read.

mod loss;
mod reveal;
mod win;

pub use loss::{is_lost, remaining_guesses, wrong_guess_count};
pub use reveal::{letter_status, reveal, slots};
pub use win::{is_won, unrevealed_letters};

use crate::config::GameConfig;
use crate::state::GameState;
use crate::types::Outcome;
use tracing::instrument;

/// Terminal outcome, if any. Win is checked before loss.
#[instrument(level = "trace", skip(state, config))]
pub fn outcome(state: &GameState, config: &GameConfig) -> Option<Outcome> {
    if is_won(state) {
        Some(Outcome::Won)
    } else if is_lost(state, config) {
        Some(Outcome::Lost)
    } else {
        None
    }
}

/// Most recent guess.
pub fn last_guessed_letter(state: &GameState) -> Option<char> {
    state.guessed_letters().last().copied()
}

/// Returns true if the most recent guess missed.
pub fn is_last_guess_wrong(state: &GameState) -> bool {
    last_guessed_letter(state).is_some_and(|letter| !state.word_contains(letter))
}

/// Index of the category whose forfeit line should show.
///
/// Only the most recent wrong guess is narrated, and never once the game has
/// ended. The index is always in `0..=N-2`.
#[instrument(level = "trace", skip(state, config))]
pub fn active_forfeit_index(state: &GameState, config: &GameConfig) -> Option<usize> {
    if !is_last_guess_wrong(state) || outcome(state, config).is_some() {
        return None;
    }
    wrong_guess_count(state).checked_sub(1)
}
