//! Mutable per-game state.

use serde::{Deserialize, Serialize};

/// State of one game.
///
/// Only the engine mutates it, and only by appending guesses and counting
/// hints. A new game replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The hidden word.
    target_word: String,
    /// Distinct guesses in the order they were made.
    guessed_letters: Vec<char>,
    /// Hints consumed this game.
    hints_used: u32,
}

impl GameState {
    /// Creates a fresh state for `target_word`.
    pub fn new(target_word: impl Into<String>) -> Self {
        Self {
            target_word: target_word.into(),
            guessed_letters: Vec::new(),
            hints_used: 0,
        }
    }

    /// Returns the hidden word.
    pub fn target_word(&self) -> &str {
        &self.target_word
    }

    /// Returns the guessed letters, oldest first.
    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed_letters
    }

    /// Returns the number of hints used.
    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    /// Returns true if `letter` has been guessed.
    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed_letters.contains(&letter)
    }

    /// Returns true if `letter` occurs in the target word.
    pub fn word_contains(&self, letter: char) -> bool {
        self.target_word.contains(letter)
    }

    /// Appends a guess. Callers must have checked it is new.
    pub(crate) fn push_guess(&mut self, letter: char) {
        self.guessed_letters.push(letter);
    }

    /// Counts one hint.
    pub(crate) fn record_hint(&mut self) {
        self.hints_used += 1;
    }

    #[cfg(test)]
    pub(crate) fn guessed_letters_mut(&mut self) -> &mut Vec<char> {
        &mut self.guessed_letters
    }

    #[cfg(test)]
    pub(crate) fn set_hints_used(&mut self, hints_used: u32) {
        self.hints_used = hints_used;
    }
}
