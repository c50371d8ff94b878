//! First-class invariants for the word-guessing game.
//!
//! Invariants are logical properties that must hold after every action.
//! They are testable independently and checked by the contracts in debug
//! builds.

mod hint_cap;
mod unique_guesses;
mod wrong_guess_bound;

pub use hint_cap::HintCapInvariant;
pub use unique_guesses::UniqueGuessesInvariant;
pub use wrong_guess_bound::WrongGuessBoundInvariant;

use serde::{Deserialize, Serialize};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together. Implemented for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match <(I1, I2) as InvariantSet<S>>::check_all(state) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All game invariants as a composable set.
pub type HangmanInvariants = (
    UniqueGuessesInvariant,
    HintCapInvariant,
    WrongGuessBoundInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Game, GameConfig};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = Game::new(GameConfig::default(), "react");
        assert!(HangmanInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_collects_every_violation() {
        let mut game = Game::new(GameConfig::default().with_max_hints(0), "go");
        game.state.guessed_letters_mut().extend(['x', 'x']);
        game.state.set_hints_used(1);

        let violations = HangmanInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (UniqueGuessesInvariant, HintCapInvariant);
        let game = Game::new(GameConfig::default(), "go");
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
