//! Immutable game configuration.

use crate::error::EngineError;
use crate::types::Category;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Hint cap used when none is configured.
pub const DEFAULT_MAX_HINTS: u32 = 2;

fn default_max_hints() -> u32 {
    DEFAULT_MAX_HINTS
}

/// Configuration supplied once at engine construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameConfig {
    /// Ordered categories; one life each except the last.
    categories: Vec<Category>,

    /// Hints available per game.
    #[serde(default = "default_max_hints")]
    max_hints: u32,
}

impl GameConfig {
    /// Creates a configuration.
    #[instrument(skip(categories), fields(categories = categories.len()))]
    pub fn new(categories: Vec<Category>, max_hints: u32) -> Self {
        Self {
            categories,
            max_hints,
        }
    }

    /// Returns a copy with a different hint cap.
    pub fn with_max_hints(mut self, max_hints: u32) -> Self {
        self.max_hints = max_hints;
        self
    }

    /// Number of wrong guesses that ends the game (N - 1).
    pub fn max_wrong_guesses(&self) -> usize {
        self.categories.len().saturating_sub(1)
    }

    /// Checks that the configuration describes a playable game.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TooFewCategories`] when fewer than two
    /// categories are configured.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.categories.len() < 2 {
            return Err(EngineError::TooFewCategories {
                found: self.categories.len(),
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(programming_languages(), DEFAULT_MAX_HINTS)
    }
}

/// The default theme: programming languages falling to Assembly.
///
/// Nine categories, so eight wrong guesses end the game.
pub fn programming_languages() -> Vec<Category> {
    vec![
        Category::new("HTML", "#F9F4DA", "#E2680F"),
        Category::new("CSS", "#F9F4DA", "#328AF1"),
        Category::new("JavaScript", "#1E1E1E", "#F4EB13"),
        Category::new("React", "#1E1E1E", "#2ED3E9"),
        Category::new("TypeScript", "#F9F4DA", "#298EC6"),
        Category::new("Node.js", "#F9F4DA", "#599137"),
        Category::new("Python", "#1E1E1E", "#FFD742"),
        Category::new("Ruby", "#F9F4DA", "#D02B2B"),
        Category::new("Assembly", "#F9F4DA", "#2D519F"),
    ]
}
