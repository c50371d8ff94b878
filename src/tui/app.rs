//! Application state and logic.

use crate::cues::{Cue, CuePlayer, play_or_log};
use strictly_hangman::{Engine, EngineError, GameSnapshot, GuessEvent, GuessOutcome, HintOutcome};
use tracing::{debug, info, instrument};

use super::input::Command;

/// Main application state.
pub struct App {
    engine: Engine,
    cues: Box<dyn CuePlayer>,
    status_message: String,
    should_quit: bool,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("engine", &self.engine)
            .field("status_message", &self.status_message)
            .field("should_quit", &self.should_quit)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Creates a new application.
    ///
    /// A game that is decided from the start plays its ending cue here.
    pub fn new(engine: Engine, cues: impl CuePlayer + 'static) -> Self {
        let mut app = Self {
            engine,
            cues: Box::new(cues),
            status_message: String::new(),
            should_quit: false,
        };
        app.play_ending();
        app
    }

    /// Gets the engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Captures the current game for drawing.
    pub fn snapshot(&self) -> GameSnapshot {
        self.engine.snapshot()
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one player command.
    ///
    /// # Errors
    ///
    /// Returns the engine error if a new game could not be started; the
    /// current game is kept in that case.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) -> Result<(), EngineError> {
        debug!(?command, "Handling command");

        match command {
            Command::Guess(letter) => match self.engine.guess_letter(letter) {
                GuessOutcome::Applied(event) => self.after_guess(event),
                GuessOutcome::Ignored(reason) => self.status_message = reason.to_string(),
            },
            Command::Hint => match self.engine.use_hint() {
                HintOutcome::Revealed(event) => {
                    self.after_guess(event);
                    self.status_message = format!("Hint: the word contains {}", event.letter);
                }
                HintOutcome::Ignored(reason) => self.status_message = reason.to_string(),
            },
            Command::NewGame => {
                if self.engine.game().is_over() {
                    if let Err(e) = self.engine.start_new_game() {
                        self.status_message = format!("Could not start a new game: {}", e);
                        return Err(e);
                    }
                    info!("New game started from the keyboard");
                    self.status_message.clear();
                    self.play_ending();
                } else {
                    self.status_message = "Finish this game first".to_string();
                }
            }
            Command::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
        Ok(())
    }

    /// Plays the ending cue if the game is decided and it has not played yet.
    fn play_ending(&mut self) {
        if let Some(outcome) = self.engine.take_terminal_signal() {
            play_or_log(self.cues.as_mut(), Cue::for_outcome(outcome));
        }
    }

    /// Plays the guess cue, or the ending cue when the guess decided the game.
    fn after_guess(&mut self, event: GuessEvent) {
        self.status_message.clear();
        let cue = match self.engine.take_terminal_signal() {
            Some(outcome) => Cue::for_outcome(outcome),
            None => Cue::for_guess(event),
        };
        play_or_log(self.cues.as_mut(), cue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;
    use strictly_hangman::{Category, FarewellPhrases, GameConfig, GameRng, WordSourceError};

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<Cue>>>);

    impl CuePlayer for Recorder {
        fn play(&mut self, cue: Cue) -> io::Result<()> {
            self.0.borrow_mut().push(cue);
            Ok(())
        }
    }

    fn app(words: &[&str], recorder: Recorder) -> App {
        let mut words: Vec<String> = words.iter().rev().map(|w| w.to_string()).collect();
        let categories = (0..3)
            .map(|i| Category::new(format!("Lang{i}"), "#000000", "#FFFFFF"))
            .collect();
        let engine = Engine::new(
            GameConfig::new(categories, 1),
            move || {
                words
                    .pop()
                    .ok_or_else(|| WordSourceError::new("Word supply exhausted"))
            },
            GameRng::new(0),
            FarewellPhrases::default(),
        )
        .unwrap();
        App::new(engine, recorder)
    }

    #[test]
    fn test_cues_follow_guesses() {
        let recorder = Recorder::default();
        let mut app = app(&["go"], recorder.clone());
        app.handle(Command::Guess('x')).unwrap();
        app.handle(Command::Guess('g')).unwrap();
        app.handle(Command::Guess('o')).unwrap();
        assert_eq!(*recorder.0.borrow(), vec![Cue::Wrong, Cue::Correct, Cue::Win]);
    }

    #[test]
    fn test_lose_cue_fires_once() {
        let recorder = Recorder::default();
        let mut app = app(&["go"], recorder.clone());
        app.handle(Command::Guess('x')).unwrap();
        app.handle(Command::Guess('y')).unwrap();
        app.handle(Command::Guess('z')).unwrap();
        app.handle(Command::Hint).unwrap();
        assert_eq!(*recorder.0.borrow(), vec![Cue::Wrong, Cue::Lose]);
        assert_eq!(app.status_message(), "Game is already over");
    }

    #[test]
    fn test_new_game_only_when_over() {
        let mut app = app(&["go", "hi"], Recorder::default());
        app.handle(Command::NewGame).unwrap();
        assert_eq!(app.engine().target_word(), "go");
        assert_eq!(app.status_message(), "Finish this game first");

        app.handle(Command::Guess('g')).unwrap();
        app.handle(Command::Guess('o')).unwrap();
        app.handle(Command::NewGame).unwrap();
        assert_eq!(app.engine().target_word(), "hi");
        assert!(app.status_message().is_empty());
    }

    #[test]
    fn test_game_decided_at_start_plays_win_once() {
        let recorder = Recorder::default();
        let mut app = app(&["", "go", ""], recorder.clone());
        assert_eq!(*recorder.0.borrow(), vec![Cue::Win]);

        app.handle(Command::Guess('g')).unwrap();
        app.handle(Command::NewGame).unwrap();
        assert_eq!(app.engine().target_word(), "go");
        assert_eq!(*recorder.0.borrow(), vec![Cue::Win]);

        app.handle(Command::Guess('g')).unwrap();
        app.handle(Command::Guess('o')).unwrap();
        app.handle(Command::NewGame).unwrap();
        assert_eq!(app.engine().target_word(), "");
        assert_eq!(
            *recorder.0.borrow(),
            vec![Cue::Win, Cue::Correct, Cue::Win, Cue::Win]
        );
    }

    #[test]
    fn test_new_game_failure_keeps_game() {
        let mut app = app(&["go"], Recorder::default());
        app.handle(Command::Guess('g')).unwrap();
        app.handle(Command::Guess('o')).unwrap();
        assert!(app.handle(Command::NewGame).is_err());
        assert!(app.engine().game().is_won());
        assert!(app.status_message().starts_with("Could not start a new game"));
    }

    #[test]
    fn test_hint_and_quit() {
        let mut app = app(&["go"], Recorder::default());
        app.handle(Command::Hint).unwrap();
        assert!(app.status_message().starts_with("Hint: the word contains"));
        app.handle(Command::Hint).unwrap();
        assert_eq!(app.status_message(), "No hints left");
        app.handle(Command::Quit).unwrap();
        assert!(app.should_quit());
    }
}
