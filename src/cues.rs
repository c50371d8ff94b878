//! Audible cues for guesses and game endings.

use std::io::{self, Write};
use strictly_hangman::{GuessEvent, Outcome};
use strum::{Display, EnumIter};
use tracing::{debug, instrument, warn};

/// A view-side reaction to a guess or a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Cue {
    /// Letter is in the word.
    Correct,
    /// Letter is not in the word.
    Wrong,
    /// Word completed.
    Win,
    /// Lives spent.
    Lose,
}

impl Cue {
    /// Cue for an applied guess or hint.
    pub fn for_guess(event: GuessEvent) -> Self {
        if event.correct { Cue::Correct } else { Cue::Wrong }
    }

    /// Cue for a game ending.
    pub fn for_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won => Cue::Win,
            Outcome::Lost => Cue::Lose,
        }
    }
}

/// Plays cues.
pub trait CuePlayer {
    /// Plays one cue.
    fn play(&mut self, cue: Cue) -> io::Result<()>;
}

/// Rings the terminal bell on misses and losses.
#[derive(Debug)]
pub struct TerminalBell<W: Write> {
    out: W,
}

impl TerminalBell<io::Stdout> {
    /// Bell on standard output.
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalBell<W> {
    /// Bell on an arbitrary writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the bell, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CuePlayer for TerminalBell<W> {
    fn play(&mut self, cue: Cue) -> io::Result<()> {
        match cue {
            Cue::Wrong | Cue::Lose => {
                self.out.write_all(b"\x07")?;
                self.out.flush()
            }
            Cue::Correct | Cue::Win => Ok(()),
        }
    }
}

/// Plays nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl CuePlayer for Silent {
    fn play(&mut self, _cue: Cue) -> io::Result<()> {
        Ok(())
    }
}

/// Plays a cue, logging and dropping any failure.
#[instrument(skip(player))]
pub fn play_or_log(player: &mut dyn CuePlayer, cue: Cue) {
    match player.play(cue) {
        Ok(()) => debug!(%cue, "Cue played"),
        Err(e) => warn!(%cue, error = %e, "Failed to play cue"),
    }
}
