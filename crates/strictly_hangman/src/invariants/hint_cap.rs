//! Hint cap invariant.

use super::Invariant;
use crate::Game;

/// Invariant: hints used never exceed the configured cap.
pub struct HintCapInvariant;

impl Invariant<Game> for HintCapInvariant {
    fn holds(game: &Game) -> bool {
        game.hints_used() <= *game.config().max_hints()
    }

    fn description() -> &'static str {
        "Hints used never exceed max_hints"
    }
}
