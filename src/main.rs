//! Strictly Endgame - Unified CLI
//!
//! Word-guessing game with a terminal UI and scriptable snapshots.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use strictly_endgame::cli::{Cli, Command};
use strictly_endgame::tui::{self, DEFAULT_LOG_FILTER};
use strictly_endgame::{Settings, apply_script};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            seed,
            words,
            no_sound,
        } => run_play(&cli.config, seed, words, no_sound),
        Command::Snapshot { seed, guesses } => run_snapshot(&cli.config, seed, &guesses),
        Command::Config => run_config(&cli.config),
    }
}

/// Logs to stderr so stdout stays machine-readable.
fn initialize_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load settings, reporting the path on failure.
fn load_settings(path: &Path) -> Result<Settings> {
    Settings::load(path).with_context(|| format!("Failed to load settings from {}", path.display()))
}

/// Run the interactive game
fn run_play(config: &Path, seed: Option<u64>, words: Option<PathBuf>, no_sound: bool) -> Result<()> {
    let mut settings = load_settings(config)?.with_seed(seed).with_word_list(words);
    if no_sound {
        settings = settings.with_sound(false);
    }
    tui::run_tui(&settings)
}

/// Play a guess script and print the snapshot as JSON
#[instrument(skip(config))]
fn run_snapshot(config: &Path, seed: Option<u64>, guesses: &str) -> Result<()> {
    initialize_stderr_tracing();

    let settings = load_settings(config)?.with_seed(seed);
    let mut engine = settings
        .build_engine()
        .context("Failed to start the game")?;
    let applied = apply_script(&mut engine, guesses);
    info!(applied, "Guess script applied");

    let json = serde_json::to_string_pretty(&engine.snapshot())
        .context("Failed to serialize snapshot")?;
    println!("{}", json);
    Ok(())
}

/// Print the effective settings
fn run_config(config: &Path) -> Result<()> {
    initialize_stderr_tracing();

    let settings = load_settings(config)?;
    let toml = settings.to_toml().context("Failed to render settings")?;
    print!("{}", toml);
    Ok(())
}
