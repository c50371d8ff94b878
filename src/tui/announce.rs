//! Screen-reader announcements.

use strictly_hangman::{GameSnapshot, Slot};

/// Describes the most recent guess, if there is one.
pub fn last_guess(snapshot: &GameSnapshot) -> Option<String> {
    let letter = (*snapshot.last_guessed_letter())?;
    let verdict = if *snapshot.is_last_guess_wrong() {
        format!("Sorry, the letter {} is not in the word.", letter)
    } else {
        format!("Correct! The letter {} is in the word.", letter)
    };
    Some(format!(
        "{} You have {} attempts left.",
        verdict,
        snapshot.remaining_guesses()
    ))
}

/// Spells the word, one position per sentence.
///
/// Letters revealed only because the game was lost still read as blanks.
pub fn current_word(snapshot: &GameSnapshot) -> String {
    let spoken: Vec<String> = snapshot
        .slots()
        .iter()
        .map(|slot| match slot {
            Slot::Guessed(letter) => format!("{}.", letter),
            Slot::Hidden | Slot::Missed(_) => "blank.".to_string(),
        })
        .collect();
    format!("Current word: {}", spoken.join(" "))
}

/// All announcement lines, oldest first.
pub fn lines(snapshot: &GameSnapshot) -> Vec<String> {
    last_guess(snapshot)
        .into_iter()
        .chain(std::iter::once(current_word(snapshot)))
        .collect()
}
