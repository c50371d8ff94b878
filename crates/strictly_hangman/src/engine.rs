//! The game engine: owns the current game and its collaborators.
//!
//! All mutation goes through three actions ([`Engine::guess_letter`],
//! [`Engine::use_hint`], [`Engine::start_new_game`]). Everything else is a
//! pure read. The engine performs no I/O; views react to the returned events.

use crate::action::{Guess, GuessEvent, GuessOutcome, HintOutcome, HintRequest};
use crate::config::GameConfig;
use crate::contracts::{Contract, GuessContract, HintContract};
use crate::error::EngineError;
use crate::forfeit::ForfeitText;
use crate::game::Game;
use crate::snapshot::GameSnapshot;
use crate::source::{HintPicker, WordSource, is_playable_word};
use crate::types::Outcome;
use tracing::{debug, info, instrument};

/// Word-guessing game engine.
pub struct Engine {
    game: Game,
    words: Box<dyn WordSource>,
    picker: Box<dyn HintPicker>,
    forfeits: Box<dyn ForfeitText>,
    /// Set once the current game's terminal outcome has been handed out.
    terminal_signal_emitted: bool,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("game", &self.game)
            .field("terminal_signal_emitted", &self.terminal_signal_emitted)
            .finish_non_exhaustive()
    }
}

impl Engine {
    /// Creates an engine and draws the first word.
    ///
    /// # Errors
    ///
    /// Fails if the configuration has fewer than two categories, or if the
    /// word source fails or yields something other than a lowercase word.
    #[instrument(skip_all, fields(categories = config.categories().len(), max_hints = *config.max_hints()))]
    pub fn new(
        config: GameConfig,
        words: impl WordSource + 'static,
        picker: impl HintPicker + 'static,
        forfeits: impl ForfeitText + 'static,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        let mut words: Box<dyn WordSource> = Box::new(words);
        let word = draw_word(words.as_mut())?;
        info!(word_length = word.chars().count(), "Engine ready");

        Ok(Self {
            game: Game::new(config, word),
            words,
            picker: Box::new(picker),
            forfeits: Box::new(forfeits),
            terminal_signal_emitted: false,
        })
    }

    /// Returns the current game for reading.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GameConfig {
        self.game.config()
    }

    /// Returns the hidden word.
    pub fn target_word(&self) -> &str {
        self.game.state().target_word()
    }

    /// Whether the current game's terminal outcome was already handed out.
    pub fn terminal_signal_emitted(&self) -> bool {
        self.terminal_signal_emitted
    }

    /// Forfeit line for the most recent wrong guess, if one should show.
    pub fn active_forfeit_text(&self) -> Option<String> {
        self.game
            .active_forfeit_category()
            .map(|category| self.forfeits.forfeit_text(category.name()))
    }

    /// Captures the read surface for views.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.game, self.active_forfeit_text())
    }

    /// Guesses a letter.
    ///
    /// `letter` must already be a lowercase single character; the engine
    /// matches it exactly. Repeated letters and guesses after the game ended
    /// are ignored.
    #[instrument(skip(self), fields(word_length = self.game.target_word_length()))]
    pub fn guess_letter(&mut self, letter: char) -> GuessOutcome {
        let guess = Guess::new(letter);
        if let Err(reason) = GuessContract::pre(&self.game, &guess) {
            debug!(%reason, "Guess ignored");
            return GuessOutcome::Ignored(reason);
        }

        #[cfg(debug_assertions)]
        let before = self.game.clone();

        let event = self.apply_guess(letter);

        #[cfg(debug_assertions)]
        if let Err(violations) = GuessContract::post(&before, &self.game) {
            panic!("Guess postcondition failed: {violations:?}");
        }

        GuessOutcome::Applied(event)
    }

    /// Reveals one hidden letter chosen uniformly among the distinct
    /// unguessed letters of the word.
    ///
    /// A hint is always a correct letter, so it can win the game but never
    /// lose it.
    #[instrument(skip(self), fields(hints_used = self.game.hints_used()))]
    pub fn use_hint(&mut self) -> HintOutcome {
        if let Err(reason) = HintContract::pre(&self.game, &HintRequest) {
            debug!(%reason, "Hint ignored");
            return HintOutcome::Ignored(reason);
        }

        #[cfg(debug_assertions)]
        let before = self.game.clone();

        let candidates = self.game.unrevealed_letters();
        let index = self.picker.pick_index(candidates.len()).min(candidates.len() - 1);
        let letter = candidates[index];
        let event = self.apply_guess(letter);
        self.game.state.record_hint();
        info!(hints_used = self.game.hints_used(), "Hint used");

        #[cfg(debug_assertions)]
        if let Err(violations) = HintContract::post(&before, &self.game) {
            panic!("Hint postcondition failed: {violations:?}");
        }

        HintOutcome::Revealed(event)
    }

    /// Replaces the current game with a fresh one.
    ///
    /// # Errors
    ///
    /// If the word source fails, the error is returned and the current game
    /// is left exactly as it was.
    #[instrument(skip(self))]
    pub fn start_new_game(&mut self) -> Result<(), EngineError> {
        let word = draw_word(self.words.as_mut())?;
        info!(word_length = word.chars().count(), "New game started");
        self.game = Game::new(self.game.config().clone(), word);
        self.terminal_signal_emitted = false;
        Ok(())
    }

    /// Hands out the terminal outcome once per game.
    ///
    /// Returns `Some` on the first call after the game became terminal and
    /// `None` on every later call until [`Engine::start_new_game`]. Views use
    /// this to fire win/lose cues at most once.
    #[instrument(skip(self))]
    pub fn take_terminal_signal(&mut self) -> Option<Outcome> {
        match self.game.outcome() {
            None => {
                self.terminal_signal_emitted = false;
                None
            }
            Some(_) if self.terminal_signal_emitted => None,
            Some(outcome) => {
                self.terminal_signal_emitted = true;
                info!(%outcome, "Game over");
                Some(outcome)
            }
        }
    }

    /// Shared path for guesses and hints.
    fn apply_guess(&mut self, letter: char) -> GuessEvent {
        let correct = self.game.state().word_contains(letter);
        self.game.state.push_guess(letter);
        debug!(%letter, correct, remaining = self.game.remaining_guesses(), "Guess applied");
        GuessEvent { letter, correct }
    }
}

/// Draws a word and checks it is `a`-`z` only (empty allowed).
#[instrument(skip(words))]
fn draw_word(words: &mut dyn WordSource) -> Result<String, EngineError> {
    let word = words.next_word()?;
    if !is_playable_word(&word) {
        return Err(EngineError::InvalidWord { word });
    }
    Ok(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WordSourceError;
    use crate::{Category, FarewellPhrases, GameRng, IgnoreReason};

    fn engine_for(word: &'static str, categories: usize, max_hints: u32) -> Engine {
        let categories = (0..categories)
            .map(|i| Category::new(format!("C{i}"), "#000000", "#FFFFFF"))
            .collect();
        Engine::new(
            GameConfig::new(categories, max_hints),
            move || Ok::<_, WordSourceError>(word.to_string()),
            |_len: usize| 0usize,
            FarewellPhrases::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_guess_reports_classification() {
        let mut engine = engine_for("react", 5, 2);
        assert_eq!(
            engine.guess_letter('z'),
            GuessOutcome::Applied(GuessEvent { letter: 'z', correct: false })
        );
        assert_eq!(
            engine.guess_letter('r'),
            GuessOutcome::Applied(GuessEvent { letter: 'r', correct: true })
        );
    }

    #[test]
    fn test_repeat_guess_ignored() {
        let mut engine = engine_for("react", 5, 2);
        engine.guess_letter('z');
        assert_eq!(
            engine.guess_letter('z'),
            GuessOutcome::Ignored(IgnoreReason::AlreadyGuessed('z'))
        );
        assert_eq!(engine.game().wrong_guess_count(), 1);
    }

    #[test]
    fn test_hint_uses_picker_order() {
        let mut engine = engine_for("react", 5, 2);
        let outcome = engine.use_hint();
        assert_eq!(
            outcome,
            HintOutcome::Revealed(GuessEvent { letter: 'r', correct: true })
        );
        assert_eq!(engine.game().hints_used(), 1);
    }

    #[test]
    fn test_out_of_range_pick_is_clamped() {
        let mut engine = Engine::new(
            GameConfig::default(),
            || Ok::<_, WordSourceError>("go".to_string()),
            |len: usize| len + 10,
            FarewellPhrases::default(),
        )
        .unwrap();
        assert_eq!(engine.use_hint().event().unwrap().letter, 'o');
    }

    #[test]
    fn test_uppercase_word_rejected() {
        let result = Engine::new(
            GameConfig::default(),
            || Ok::<_, WordSourceError>("React".to_string()),
            |_len: usize| 0usize,
            FarewellPhrases::default(),
        );
        assert!(matches!(result, Err(EngineError::InvalidWord { .. })));
    }

    #[test]
    fn test_non_ascii_word_rejected() {
        let result = Engine::new(
            GameConfig::default(),
            || Ok::<_, WordSourceError>("café".to_string()),
            |_len: usize| 0usize,
            FarewellPhrases::default(),
        );
        assert!(matches!(
            result,
            Err(EngineError::InvalidWord { ref word }) if word == "café"
        ));
    }

    #[test]
    fn test_seeded_hints_reach_every_letter() {
        let mut seen = Vec::new();
        for seed in 0..64 {
            let mut engine = Engine::new(
                GameConfig::default(),
                || Ok::<_, WordSourceError>("banana".to_string()),
                GameRng::new(seed),
                FarewellPhrases::default(),
            )
            .unwrap();
            let letter = engine.use_hint().event().unwrap().letter;
            assert!("ban".contains(letter));
            if !seen.contains(&letter) {
                seen.push(letter);
            }
        }
        seen.sort_unstable();
        assert_eq!(seen, vec!['a', 'b', 'n']);
    }

    #[test]
    fn test_source_failure_surfaces() {
        let result = Engine::new(
            GameConfig::default(),
            || Err::<String, _>(WordSourceError::new("offline")),
            |_len: usize| 0usize,
            FarewellPhrases::default(),
        );
        assert!(matches!(result, Err(EngineError::WordSource(_))));
    }

    #[test]
    fn test_forfeit_text_names_category() {
        let mut engine = engine_for("react", 5, 2);
        assert_eq!(engine.active_forfeit_text(), None);
        engine.guess_letter('z');
        assert!(engine.active_forfeit_text().unwrap().contains("C0"));
        engine.guess_letter('q');
        assert!(engine.active_forfeit_text().unwrap().contains("C1"));
    }

    #[test]
    fn test_snapshot_mirrors_game() {
        let mut engine = engine_for("react", 5, 2);
        engine.guess_letter('z');
        let snapshot = engine.snapshot();
        assert_eq!(*snapshot.wrong_guess_count(), 1);
        assert_eq!(*snapshot.remaining_guesses(), 3);
        assert_eq!(*snapshot.active_forfeit_index(), Some(0));
        assert_eq!(*snapshot.hints_remaining(), 2);
        assert_eq!(snapshot.letter_status('z'), crate::LetterStatus::Wrong);
    }
}
