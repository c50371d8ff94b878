//! Win detection.

use crate::state::GameState;
use tracing::instrument;

/// Returns true when every distinct letter of the word has been guessed.
///
/// Vacuously true for an empty word.
#[instrument(level = "trace", skip(state))]
pub fn is_won(state: &GameState) -> bool {
    state
        .target_word()
        .chars()
        .all(|letter| state.has_guessed(letter))
}

/// Distinct letters of the word not yet guessed, in first-occurrence order.
#[instrument(level = "trace", skip(state))]
pub fn unrevealed_letters(state: &GameState) -> Vec<char> {
    let mut letters = Vec::new();
    for letter in state.target_word().chars() {
        if !state.has_guessed(letter) && !letters.contains(&letter) {
            letters.push(letter);
        }
    }
    letters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guessed(word: &str, letters: &str) -> GameState {
        let mut state = GameState::new(word);
        for c in letters.chars() {
            state.push_guess(c);
        }
        state
    }

    #[test]
    fn test_empty_word_is_won() {
        assert!(is_won(&GameState::new("")));
    }

    #[test]
    fn test_partial_word_not_won() {
        assert!(!is_won(&guessed("react", "rea")));
    }

    #[test]
    fn test_repeated_letters_need_one_guess() {
        assert!(is_won(&guessed("book", "bok")));
    }

    #[test]
    fn test_wrong_letters_do_not_matter() {
        assert!(is_won(&guessed("go", "xyzgo")));
    }

    #[test]
    fn test_unrevealed_distinct_in_order() {
        assert_eq!(unrevealed_letters(&guessed("banana", "")), vec!['b', 'a', 'n']);
        assert_eq!(unrevealed_letters(&guessed("banana", "a")), vec!['b', 'n']);
        assert!(unrevealed_letters(&guessed("banana", "abn")).is_empty());
    }
}
