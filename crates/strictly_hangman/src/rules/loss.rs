//! Wrong-guess accounting and loss detection.

use crate::config::GameConfig;
use crate::state::GameState;
use tracing::instrument;

/// Number of guessed letters absent from the word.
#[instrument(level = "trace", skip(state))]
pub fn wrong_guess_count(state: &GameState) -> usize {
    state
        .guessed_letters()
        .iter()
        .filter(|&&letter| !state.word_contains(letter))
        .count()
}

/// Lives left: `max(0, max_wrong_guesses - wrong_guess_count)`.
#[instrument(level = "trace", skip(state, config))]
pub fn remaining_guesses(state: &GameState, config: &GameConfig) -> usize {
    config
        .max_wrong_guesses()
        .saturating_sub(wrong_guess_count(state))
}

/// Returns true once wrong guesses reach `max_wrong_guesses`.
#[instrument(level = "trace", skip(state, config))]
pub fn is_lost(state: &GameState, config: &GameConfig) -> bool {
    wrong_guess_count(state) >= config.max_wrong_guesses()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn config(n: usize) -> GameConfig {
        let categories = (0..n)
            .map(|i| Category::new(format!("C{i}"), "#000000", "#FFFFFF"))
            .collect();
        GameConfig::new(categories, 0)
    }

    fn guessed(word: &str, letters: &str) -> GameState {
        let mut state = GameState::new(word);
        for c in letters.chars() {
            state.push_guess(c);
        }
        state
    }

    #[test]
    fn test_counts_only_wrong_letters() {
        assert_eq!(wrong_guess_count(&guessed("react", "zrqe")), 2);
    }

    #[test]
    fn test_remaining_counts_down() {
        let config = config(5);
        assert_eq!(remaining_guesses(&guessed("react", ""), &config), 4);
        assert_eq!(remaining_guesses(&guessed("react", "z"), &config), 3);
    }

    #[test]
    fn test_lost_at_n_minus_one() {
        let config = config(3);
        assert!(!is_lost(&guessed("go", "x"), &config));
        let state = guessed("go", "xy");
        assert!(is_lost(&state, &config));
        assert_eq!(remaining_guesses(&state, &config), 0);
    }
}
