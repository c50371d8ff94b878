//! A game in progress or finished: configuration plus state.
//!
//! `Game` is the pure half of the engine. It is cheap to clone, so contracts
//! can compare a before/after pair, and every derivation is a method here.

use crate::config::GameConfig;
use crate::rules;
use crate::state::GameState;
use crate::types::{ALPHABET, Category, LetterStatus, Outcome, Slot};
use serde::{Deserialize, Serialize};

/// Configuration and state of the current game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) config: GameConfig,
    pub(crate) state: GameState,
}

impl Game {
    /// Creates a game for `target_word`.
    pub fn new(config: GameConfig, target_word: impl Into<String>) -> Self {
        Self {
            config,
            state: GameState::new(target_word),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Length of the hidden word in letters.
    pub fn target_word_length(&self) -> usize {
        self.state.target_word().chars().count()
    }

    /// Guessed letters absent from the word.
    pub fn wrong_guess_count(&self) -> usize {
        rules::wrong_guess_count(&self.state)
    }

    /// Number of lives (N - 1).
    pub fn max_wrong_guesses(&self) -> usize {
        self.config.max_wrong_guesses()
    }

    /// Lives left.
    pub fn remaining_guesses(&self) -> usize {
        rules::remaining_guesses(&self.state, &self.config)
    }

    /// Every distinct letter has been guessed.
    pub fn is_won(&self) -> bool {
        rules::is_won(&self.state)
    }

    /// All lives are spent.
    pub fn is_lost(&self) -> bool {
        rules::is_lost(&self.state, &self.config)
    }

    /// Won or lost.
    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Terminal outcome, win first.
    pub fn outcome(&self) -> Option<Outcome> {
        rules::outcome(&self.state, &self.config)
    }

    /// Most recent guess.
    pub fn last_guessed_letter(&self) -> Option<char> {
        rules::last_guessed_letter(&self.state)
    }

    /// The most recent guess missed.
    pub fn is_last_guess_wrong(&self) -> bool {
        rules::is_last_guess_wrong(&self.state)
    }

    /// Category index to narrate, if any.
    pub fn active_forfeit_index(&self) -> Option<usize> {
        rules::active_forfeit_index(&self.state, &self.config)
    }

    /// Category to narrate, if any.
    pub fn active_forfeit_category(&self) -> Option<&Category> {
        self.active_forfeit_index()
            .and_then(|index| self.config.categories().get(index))
    }

    /// Categories eliminated so far, in list order.
    pub fn eliminated_categories(&self) -> &[Category] {
        let categories = self.config.categories();
        &categories[..self.wrong_guess_count().min(categories.len())]
    }

    /// Display value of `letter` within the word.
    pub fn reveal(&self, letter: char) -> Option<char> {
        rules::reveal(&self.state, &self.config, letter)
    }

    /// Word slots for display.
    pub fn slots(&self) -> Vec<Slot> {
        rules::slots(&self.state, &self.config)
    }

    /// Keyboard status of `letter`.
    pub fn letter_status(&self, letter: char) -> LetterStatus {
        rules::letter_status(&self.state, letter)
    }

    /// Keyboard status of every alphabet letter.
    pub fn keyboard(&self) -> Vec<(char, LetterStatus)> {
        ALPHABET
            .iter()
            .map(|&letter| (letter, self.letter_status(letter)))
            .collect()
    }

    /// Distinct unguessed letters of the word.
    pub fn unrevealed_letters(&self) -> Vec<char> {
        rules::unrevealed_letters(&self.state)
    }

    /// Hints used this game.
    pub fn hints_used(&self) -> u32 {
        self.state.hints_used()
    }

    /// Hints still available.
    pub fn hints_remaining(&self) -> u32 {
        self.config.max_hints().saturating_sub(self.state.hints_used())
    }
}
