//! Engine error types.
//!
//! Illegal player actions are not errors (see [`crate::IgnoreReason`]).
//! These types cover misconfiguration and misbehaving collaborators.

use derive_more::{Display, Error};
use tracing::instrument;

/// Failure reported by a [`crate::WordSource`], with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Word source error: {} at {}:{}", message, file, line)]
pub struct WordSourceError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl WordSourceError {
    /// Creates a new word source error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Errors raised while constructing an engine or starting a game.
#[derive(Debug, Clone, Display, Error)]
pub enum EngineError {
    /// Fewer than two categories leaves no lives to play with.
    #[display("At least two categories are required, got {found}")]
    TooFewCategories {
        /// Number of categories supplied.
        found: usize,
    },

    /// The word source failed to produce a word.
    #[display("{_0}")]
    WordSource(#[error(source)] WordSourceError),

    /// The word source produced something that is not a lowercase word.
    #[display("Word {word:?} contains characters other than lowercase letters")]
    InvalidWord {
        /// The rejected word.
        word: String,
    },
}

impl From<WordSourceError> for EngineError {
    fn from(err: WordSourceError) -> Self {
        EngineError::WordSource(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_source_error_records_location() {
        let err = WordSourceError::new("dictionary unavailable");
        assert!(err.file.ends_with("error.rs"));
        assert!(err.line > 0);
        assert!(err.to_string().contains("dictionary unavailable"));
    }

    #[test]
    fn test_engine_error_wraps_source() {
        let err: EngineError = WordSourceError::new("boom").into();
        assert!(matches!(err, EngineError::WordSource(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
