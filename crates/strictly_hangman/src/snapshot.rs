//! Serializable read surface handed to views.

use crate::types::{LetterStatus, Outcome, Slot};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Immutable copy of everything a view may read.
///
/// The hidden word itself is not included; views see it only through
/// [`Slot`]s, which reveal it on loss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameSnapshot {
    /// Letters in the hidden word.
    target_word_length: usize,
    /// Per-position display values.
    slots: Vec<Slot>,
    /// Status of every alphabet letter, in alphabet order.
    keyboard: Vec<(char, LetterStatus)>,
    /// Guessed letters, oldest first.
    guessed_letters: Vec<char>,
    /// Wrong guesses so far.
    wrong_guess_count: usize,
    /// Lives in total.
    max_wrong_guesses: usize,
    /// Lives left.
    remaining_guesses: usize,
    /// Word completed.
    is_won: bool,
    /// Lives spent.
    is_lost: bool,
    /// Won or lost.
    is_over: bool,
    /// Terminal outcome, if any.
    outcome: Option<Outcome>,
    /// Most recent guess.
    last_guessed_letter: Option<char>,
    /// Most recent guess missed.
    is_last_guess_wrong: bool,
    /// Category being narrated.
    active_forfeit_index: Option<usize>,
    /// Forfeit line for that category.
    active_forfeit_text: Option<String>,
    /// Hints used this game.
    hints_used: u32,
    /// Hints still available.
    hints_remaining: u32,
    /// Hint cap.
    max_hints: u32,
}

impl GameSnapshot {
    /// Builds a snapshot from a game and its forfeit text.
    pub(crate) fn capture(game: &crate::Game, active_forfeit_text: Option<String>) -> Self {
        Self {
            target_word_length: game.target_word_length(),
            slots: game.slots(),
            keyboard: game.keyboard(),
            guessed_letters: game.state().guessed_letters().to_vec(),
            wrong_guess_count: game.wrong_guess_count(),
            max_wrong_guesses: game.max_wrong_guesses(),
            remaining_guesses: game.remaining_guesses(),
            is_won: game.is_won(),
            is_lost: game.is_lost(),
            is_over: game.is_over(),
            outcome: game.outcome(),
            last_guessed_letter: game.last_guessed_letter(),
            is_last_guess_wrong: game.is_last_guess_wrong(),
            active_forfeit_index: game.active_forfeit_index(),
            active_forfeit_text,
            hints_used: game.hints_used(),
            hints_remaining: game.hints_remaining(),
            max_hints: *game.config().max_hints(),
        }
    }

    /// Status of one keyboard letter.
    pub fn letter_status(&self, letter: char) -> LetterStatus {
        self.keyboard
            .iter()
            .find(|(c, _)| *c == letter)
            .map(|(_, status)| *status)
            .unwrap_or_default()
    }
}
