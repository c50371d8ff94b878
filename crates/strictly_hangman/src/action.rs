//! First-class action and event types.
//!
//! Actions describe player intent and can be checked against contracts
//! before they are applied. Illegal actions are not errors: they come back
//! as [`IgnoreReason`]s and leave the game untouched.

use serde::{Deserialize, Serialize};

/// A letter guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Guess {
    /// The guessed letter, already normalized to lowercase by the caller.
    pub letter: char,
}

impl Guess {
    /// Creates a guess.
    pub fn new(letter: char) -> Self {
        Self { letter }
    }
}

/// A request to reveal one letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct HintRequest;

/// Classification of an applied guess, for views to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuessEvent {
    /// The letter that was added.
    pub letter: char,
    /// Whether it occurs in the word.
    pub correct: bool,
}

/// Why an action was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoreReason {
    /// The game has already been won or lost.
    #[display("Game is already over")]
    GameOver,

    /// The letter was guessed before.
    #[display("Letter {:?} was already guessed", _0)]
    AlreadyGuessed(char),

    /// The hint cap has been reached.
    #[display("No hints left")]
    NoHintsLeft,

    /// Every letter of the word is already revealed.
    #[display("Nothing left to reveal")]
    NothingToReveal,
}

/// Result of [`crate::Engine::guess_letter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess was recorded.
    Applied(GuessEvent),
    /// The guess was a no-op.
    Ignored(IgnoreReason),
}

impl GuessOutcome {
    /// Returns the event if the guess was recorded.
    pub fn event(self) -> Option<GuessEvent> {
        match self {
            GuessOutcome::Applied(event) => Some(event),
            GuessOutcome::Ignored(_) => None,
        }
    }

    /// Returns true if the guess was recorded.
    pub fn is_applied(self) -> bool {
        matches!(self, GuessOutcome::Applied(_))
    }
}

/// Result of [`crate::Engine::use_hint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintOutcome {
    /// A letter was revealed. The event is always correct.
    Revealed(GuessEvent),
    /// The hint was a no-op.
    Ignored(IgnoreReason),
}

impl HintOutcome {
    /// Returns the revealed event, if any.
    pub fn event(self) -> Option<GuessEvent> {
        match self {
            HintOutcome::Revealed(event) => Some(event),
            HintOutcome::Ignored(_) => None,
        }
    }

    /// Returns true if a letter was revealed.
    pub fn is_revealed(self) -> bool {
        matches!(self, HintOutcome::Revealed(_))
    }
}
