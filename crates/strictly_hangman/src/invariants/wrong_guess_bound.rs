//! Wrong-guess bound: the tally stops at the number of lives.

use super::Invariant;
use crate::Game;

/// Invariant: wrong guesses never exceed `N - 1`.
///
/// Holds because guesses are refused once the game is lost.
pub struct WrongGuessBoundInvariant;

impl Invariant<Game> for WrongGuessBoundInvariant {
    fn holds(game: &Game) -> bool {
        game.wrong_guess_count() <= game.max_wrong_guesses()
    }

    fn description() -> &'static str {
        "Wrong guesses never exceed the number of categories minus one"
    }
}
