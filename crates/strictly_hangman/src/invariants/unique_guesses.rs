//! Unique guesses invariant: a letter appears at most once.

use super::Invariant;
use crate::Game;

/// Invariant: no letter is recorded twice.
pub struct UniqueGuessesInvariant;

impl Invariant<Game> for UniqueGuessesInvariant {
    fn holds(game: &Game) -> bool {
        let guessed = game.state().guessed_letters();
        guessed
            .iter()
            .enumerate()
            .all(|(i, letter)| !guessed[..i].contains(letter))
    }

    fn description() -> &'static str {
        "Each guessed letter is recorded at most once"
    }
}
