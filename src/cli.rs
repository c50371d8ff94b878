//! Command-line interface for strictly_endgame.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Endgame - guess the word before Assembly takes over
#[derive(Parser, Debug)]
#[command(name = "strictly_endgame")]
#[command(about = "Terminal word-guessing game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults are used if it doesn't exist)
    #[arg(short, long, global = true, default_value = "endgame.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Seed for word and hint draws (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Newline-separated word list to draw from
        #[arg(long)]
        words: Option<PathBuf>,

        /// Disable the terminal bell
        #[arg(long)]
        no_sound: bool,
    },

    /// Apply guesses non-interactively and print the resulting state as JSON
    Snapshot {
        /// Seed for word and hint draws (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Letters to guess, in order (non-letters are skipped, `?` uses a hint)
        #[arg(long, default_value = "")]
        guesses: String,
    },

    /// Print the effective settings as TOML
    Config,
}
