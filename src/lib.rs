//! Strictly Endgame - terminal front end for the word-guessing game
//!
//! Guess the hidden word before every programming language but the last
//! has been eliminated.
//!
//! # Architecture
//!
//! - **Settings**: TOML configuration and engine wiring
//! - **TUI**: stateless ratatui views over engine snapshots
//! - **Cues**: terminal bell reactions to guesses and endings
//! - **Replay**: scripted play for the `snapshot` command
//!
//! # Example
//!
//! ```
//! use strictly_endgame::{Settings, apply_script};
//!
//! # fn main() -> Result<(), strictly_endgame::SettingsError> {
//! let settings = Settings::default().with_seed(Some(7));
//! let mut engine = settings.build_engine()?;
//! apply_script(&mut engine, "etaoin");
//! println!("{} attempts left", engine.game().remaining_guesses());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod cues;
mod replay;
mod settings;
pub mod tui;

pub use cues::{Cue, CuePlayer, Silent, TerminalBell, play_or_log};
pub use replay::{HINT_MARK, apply_script};
pub use settings::{Settings, SettingsError};
