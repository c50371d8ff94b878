//! Pure word-guessing game logic.
//!
//! The player guesses letters of a hidden word. Each wrong guess eliminates
//! the next [`Category`] in list order; losing all but the last ends the
//! game. Hints reveal a correct letter, up to a per-game cap.
//!
//! # Architecture
//!
//! - **Engine**: owns the current [`Game`] and injected collaborators
//! - **Rules**: pure derivations (win, loss, reveal, forfeit narration)
//! - **Contracts**: action preconditions (no-op reasons) and postconditions
//! - **Invariants**: properties checked after every action in debug builds
//! - **Snapshot**: serializable read surface for views
//!
//! # Example
//!
//! ```
//! use strictly_hangman::{Engine, FarewellPhrases, GameConfig, GameRng, WordList};
//!
//! # fn main() -> Result<(), strictly_hangman::EngineError> {
//! let words = WordList::new(vec!["react".to_string()], GameRng::new(1));
//! let mut engine = Engine::new(
//!     GameConfig::default(),
//!     words,
//!     GameRng::new(2),
//!     FarewellPhrases::default(),
//! )?;
//!
//! for letter in "react".chars() {
//!     engine.guess_letter(letter);
//! }
//! assert!(engine.game().is_won());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod engine;
mod error;
mod forfeit;
mod game;
mod rng;
mod snapshot;
mod source;
mod state;
mod types;
mod words;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{Guess, GuessEvent, GuessOutcome, HintOutcome, HintRequest, IgnoreReason};
pub use config::{DEFAULT_MAX_HINTS, GameConfig, programming_languages};
pub use engine::Engine;
pub use error::{EngineError, WordSourceError};
pub use forfeit::{FarewellPhrases, ForfeitText};
pub use game::Game;
pub use rng::GameRng;
pub use snapshot::GameSnapshot;
pub use source::{HintPicker, WordList, WordSource, is_playable_word};
pub use state::GameState;
pub use types::{ALPHABET, Category, LetterStatus, Outcome, Slot};
pub use words::BUILTIN_WORDS;
