//! Non-interactive play from a guess script.

use strictly_hangman::Engine;
use tracing::{debug, instrument};

use crate::tui::input::normalize_letter;

/// Character in a script that spends a hint.
pub const HINT_MARK: char = '?';

/// Applies each letter of `script` as a guess and each `?` as a hint.
///
/// Other characters are skipped. Returns the number of actions the engine
/// accepted.
#[instrument(skip(engine))]
pub fn apply_script(engine: &mut Engine, script: &str) -> usize {
    let mut applied = 0;
    for c in script.chars() {
        let accepted = if c == HINT_MARK {
            engine.use_hint().is_revealed()
        } else if let Some(letter) = normalize_letter(c) {
            engine.guess_letter(letter).is_applied()
        } else {
            debug!(%c, "Skipping non-letter");
            false
        };
        applied += usize::from(accepted);
    }
    applied
}
