//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A player command decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Guess a lowercase letter.
    Guess(char),
    /// Reveal one letter.
    Hint,
    /// Start over once the game is decided.
    NewGame,
    /// Leave the game.
    Quit,
}

/// Lowercases ASCII letters; anything else is not a guess.
pub fn normalize_letter(c: char) -> Option<char> {
    c.is_ascii_alphabetic().then(|| c.to_ascii_lowercase())
}

/// Maps a key press to a command.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Enter => Some(Command::NewGame),
        KeyCode::Char('1') | KeyCode::Char('?') => Some(Command::Hint),
        KeyCode::Char(c) => normalize_letter(c).map(Command::Guess),
        _ => None,
    }
}
