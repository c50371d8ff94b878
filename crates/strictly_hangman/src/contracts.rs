//! Contract-based validation for game actions.
//!
//! Contracts formalize {P} action {Q}: preconditions decide whether an
//! action applies at all (a failed precondition is a no-op, reported as an
//! [`IgnoreReason`]), postconditions verify the transition in debug builds.

use crate::Game;
use crate::action::{Guess, HintRequest, IgnoreReason};
use crate::invariants::{HangmanInvariants, InvariantSet, InvariantViolation};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), IgnoreReason>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not been won or lost.
pub struct GameNotOver;

impl GameNotOver {
    /// Validates the precondition.
    #[instrument(level = "trace", skip(game))]
    pub fn check(game: &Game) -> Result<(), IgnoreReason> {
        if game.is_over() {
            Err(IgnoreReason::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the letter has not been guessed.
pub struct LetterIsNew;

impl LetterIsNew {
    /// Validates the precondition.
    #[instrument(level = "trace", skip(game))]
    pub fn check(guess: &Guess, game: &Game) -> Result<(), IgnoreReason> {
        if game.state().has_guessed(guess.letter) {
            Err(IgnoreReason::AlreadyGuessed(guess.letter))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the hint cap has not been reached.
pub struct HintsAvailable;

impl HintsAvailable {
    /// Validates the precondition.
    #[instrument(level = "trace", skip(game))]
    pub fn check(game: &Game) -> Result<(), IgnoreReason> {
        if game.hints_used() >= *game.config().max_hints() {
            Err(IgnoreReason::NoHintsLeft)
        } else {
            Ok(())
        }
    }
}

/// Precondition: at least one letter of the word is still hidden.
pub struct LettersToReveal;

impl LettersToReveal {
    /// Validates the precondition.
    #[instrument(level = "trace", skip(game))]
    pub fn check(game: &Game) -> Result<(), IgnoreReason> {
        if game.unrevealed_letters().is_empty() {
            Err(IgnoreReason::NothingToReveal)
        } else {
            Ok(())
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition checks
// ─────────────────────────────────────────────────────────────

/// Transition property: within a game the word is fixed, guesses only grow
/// (the old guesses stay a prefix) and hints never decrease.
pub struct MonotonicProgress;

impl MonotonicProgress {
    /// Checks the property across one transition.
    pub fn holds(before: &Game, after: &Game) -> bool {
        let valid = before.state().target_word() == after.state().target_word()
            && after
                .state()
                .guessed_letters()
                .starts_with(before.state().guessed_letters())
            && after.hints_used() >= before.hints_used();
        if !valid {
            warn!("Monotonic progress violated");
        }
        valid
    }

    /// Human-readable description of the property.
    pub fn description() -> &'static str {
        "Word fixed, guesses append-only, hints non-decreasing"
    }
}

fn check_transition(before: &Game, after: &Game) -> Vec<InvariantViolation> {
    let mut violations = HangmanInvariants::check_all(after).err().unwrap_or_default();
    if !MonotonicProgress::holds(before, after) {
        violations.push(InvariantViolation::new(MonotonicProgress::description()));
    }
    violations
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

// ─────────────────────────────────────────────────────────────
//  Guess Contract
// ─────────────────────────────────────────────────────────────

/// Contract for letter guesses.
///
/// Preconditions:
/// - Game is not over
/// - Letter is new
///
/// Postconditions:
/// - Invariants hold, progress is monotonic
/// - Exactly one letter was added and no hint was counted
pub struct GuessContract;

impl Contract<Game, Guess> for GuessContract {
    fn pre(game: &Game, guess: &Guess) -> Result<(), IgnoreReason> {
        GameNotOver::check(game)?;
        LetterIsNew::check(guess, game)?;
        Ok(())
    }

    fn post(before: &Game, after: &Game) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = check_transition(before, after);
        let added = after.state().guessed_letters().len() as isize
            - before.state().guessed_letters().len() as isize;
        if added != 1 || after.hints_used() != before.hints_used() {
            violations.push(InvariantViolation::new(
                "A guess adds exactly one letter and no hint",
            ));
        }
        into_result(violations)
    }
}

// ─────────────────────────────────────────────────────────────
//  Hint Contract
// ─────────────────────────────────────────────────────────────

/// Contract for hint requests.
///
/// Preconditions:
/// - Game is not over
/// - Hints remain
/// - Some letter is still hidden
///
/// Postconditions:
/// - Invariants hold, progress is monotonic
/// - Exactly one hint counted, wrong guesses unchanged
pub struct HintContract;

impl Contract<Game, HintRequest> for HintContract {
    fn pre(game: &Game, _request: &HintRequest) -> Result<(), IgnoreReason> {
        GameNotOver::check(game)?;
        HintsAvailable::check(game)?;
        LettersToReveal::check(game)?;
        Ok(())
    }

    fn post(before: &Game, after: &Game) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = check_transition(before, after);
        if after.hints_used() != before.hints_used() + 1 {
            violations.push(InvariantViolation::new("A hint is counted exactly once"));
        }
        if after.wrong_guess_count() != before.wrong_guess_count() {
            violations.push(InvariantViolation::new(
                "A hint never adds a wrong guess",
            ));
        }
        into_result(violations)
    }
}
