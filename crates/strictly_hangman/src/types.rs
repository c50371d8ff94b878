//! Core domain types for the word-guessing game.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Keyboard alphabet in display order.
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// A themed "life".
///
/// Categories are eliminated one per wrong guess, in list order.
/// Colours are `#rrggbb` strings; the core never interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Category {
    /// Display name, also the key for forfeit text.
    name: String,
    /// Text colour.
    foreground: String,
    /// Chip colour.
    background: String,
}

impl Category {
    /// Creates a category.
    pub fn new(
        name: impl Into<String>,
        foreground: impl Into<String>,
        background: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            foreground: foreground.into(),
            background: background.into(),
        }
    }
}

/// How a keyboard letter has fared so far.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LetterStatus {
    /// Not guessed yet.
    #[default]
    Unguessed,
    /// Guessed and present in the word.
    Correct,
    /// Guessed and absent from the word.
    Wrong,
}

/// Display value of one position in the target word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "letter", rename_all = "snake_case")]
pub enum Slot {
    /// Not guessed and the game is not lost.
    Hidden,
    /// Revealed by a guess or hint.
    Guessed(char),
    /// Revealed only because the game was lost.
    Missed(char),
}

impl Slot {
    /// Returns the revealed letter, if any.
    pub fn letter(self) -> Option<char> {
        match self {
            Slot::Hidden => None,
            Slot::Guessed(c) | Slot::Missed(c) => Some(c),
        }
    }
}

/// Terminal result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Every distinct letter of the word was guessed.
    #[strum(to_string = "won")]
    Won,
    /// All lives were spent.
    #[strum(to_string = "lost")]
    Lost,
}

impl Outcome {
    /// Returns true for [`Outcome::Won`].
    pub fn is_won(self) -> bool {
        matches!(self, Outcome::Won)
    }
}
