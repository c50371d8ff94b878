//! Terminal UI for Strictly Endgame

pub mod announce;
pub mod app;
pub mod input;
pub mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument, warn};

use crate::cues::{Silent, TerminalBell};
use crate::settings::Settings;
use app::App;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,strictly_endgame=debug,strictly_hangman=debug";

/// Run the TUI game
pub fn run_tui(settings: &Settings) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(settings.log_file())
        .with_context(|| format!("Failed to create log file {}", settings.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting Strictly Endgame TUI");

    let engine = settings.build_engine().context("Failed to start the game")?;
    let mut app = if *settings.sound() {
        App::new(engine, TerminalBell::stdout())
    } else {
        App::new(engine, Silent)
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, then wait for the next key press.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let categories = app.engine().config().categories().clone();

    loop {
        let snapshot = app.snapshot();
        terminal.draw(|f| ui::draw(f, &snapshot, &categories, app.status_message()))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(command) = input::command_for(key) else {
            continue;
        };

        if let Err(e) = app.handle(command) {
            warn!(error = %e, "Command failed");
        }
        if app.should_quit() {
            info!("Leaving game loop");
            return Ok(());
        }
    }
}
