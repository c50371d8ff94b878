//! Injected randomness and data-supply capabilities.
//!
//! The engine never reaches for global randomness. Word draws go through a
//! [`WordSource`], hint draws through a [`HintPicker`]. Closures implement
//! both traits, so tests can substitute deterministic stubs.

use crate::error::WordSourceError;
use crate::rng::GameRng;
use crate::words::BUILTIN_WORDS;
use tracing::{debug, instrument};

/// Supplies target words on demand.
pub trait WordSource {
    /// Returns the next lowercase word.
    ///
    /// # Errors
    ///
    /// Returns [`WordSourceError`] when no word can be produced.
    fn next_word(&mut self) -> Result<String, WordSourceError>;
}

impl<F> WordSource for F
where
    F: FnMut() -> Result<String, WordSourceError>,
{
    fn next_word(&mut self) -> Result<String, WordSourceError> {
        self()
    }
}

/// Picks hint letters.
pub trait HintPicker {
    /// Returns a uniformly chosen index in `0..len`. Never called with `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<F> HintPicker for F
where
    F: FnMut(usize) -> usize,
{
    fn pick_index(&mut self, len: usize) -> usize {
        self(len)
    }
}

/// Whether every character of `word` is one of `a`-`z`.
///
/// The empty word passes.
pub fn is_playable_word(word: &str) -> bool {
    word.chars().all(|c| c.is_ascii_lowercase())
}

/// Word source drawing uniformly from a fixed list.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
    rng: GameRng,
}

impl WordList {
    /// Creates a word list over the given words.
    #[instrument(skip(words, rng), fields(seed = rng.seed()))]
    pub fn new(words: Vec<String>, rng: GameRng) -> Self {
        debug!(count = words.len(), "Word list created");
        Self { words, rng }
    }

    /// Creates a word list over the built-in dictionary.
    pub fn builtin(rng: GameRng) -> Self {
        Self::new(BUILTIN_WORDS.iter().map(|w| w.to_string()).collect(), rng)
    }

    /// Parses a newline-separated word list.
    ///
    /// Blank lines and lines starting with `#` are skipped; words are
    /// trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`WordSourceError`] naming the first line whose word is not
    /// made of `a`-`z` only.
    pub fn from_text(text: &str, rng: GameRng) -> Result<Self, WordSourceError> {
        let mut words = Vec::new();
        for (index, line) in text.lines().enumerate() {
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            if !is_playable_word(word) {
                return Err(WordSourceError::new(format!(
                    "Line {}: {:?} is not a lowercase a-z word",
                    index + 1,
                    word
                )));
            }
            words.push(word.to_string());
        }
        Ok(Self::new(words, rng))
    }

    /// Number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the list has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the words.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl WordSource for WordList {
    fn next_word(&mut self) -> Result<String, WordSourceError> {
        self.rng
            .choose(&self.words)
            .cloned()
            .ok_or_else(|| WordSourceError::new("Word list is empty"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_skips_blanks_and_comments() {
        let list = WordList::from_text("# words\nreact\n\n  rust  \n", GameRng::new(0)).unwrap();
        assert_eq!(list.words(), ["react".to_string(), "rust".to_string()]);
    }

    #[test]
    fn test_from_text_rejects_bad_entry_up_front() {
        for seed in 0..20 {
            let err = WordList::from_text("rust\n\nReact\n", GameRng::new(seed)).unwrap_err();
            assert!(err.message.contains("Line 3"));
            assert!(err.message.contains("React"));
        }
        assert!(WordList::from_text("café\n", GameRng::new(0)).is_err());
    }

    #[test]
    fn test_playable_words() {
        assert!(is_playable_word("react"));
        assert!(is_playable_word(""));
        assert!(!is_playable_word("React"));
        assert!(!is_playable_word("café"));
        assert!(!is_playable_word("straße"));
        assert!(!is_playable_word("node.js"));
    }

    #[test]
    fn test_empty_list_fails() {
        let mut list = WordList::new(Vec::new(), GameRng::new(0));
        assert!(list.is_empty());
        assert!(list.next_word().is_err());
    }

    #[test]
    fn test_draws_come_from_list() {
        let mut list = WordList::builtin(GameRng::new(42));
        for _ in 0..50 {
            let word = list.next_word().unwrap();
            assert!(BUILTIN_WORDS.contains(&word.as_str()));
        }
    }

    #[test]
    fn test_closure_stubs() {
        let mut source = || Ok::<_, WordSourceError>("go".to_string());
        assert_eq!(source.next_word().unwrap(), "go");

        let mut picker = |len: usize| len - 1;
        assert_eq!(picker.pick_index(4), 3);
    }
}
