//! Game settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_hangman::{
    Category, DEFAULT_MAX_HINTS, Engine, EngineError, FarewellPhrases, GameConfig, GameRng,
    WordList, programming_languages,
};
use tracing::{debug, info, instrument};

/// Offset between the word-draw seed and the hint-draw seed.
const HINT_SEED_OFFSET: u64 = 0x9E37_79B9_7F4A_7C15;

/// User-configurable settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Hints per game.
    #[serde(default = "default_max_hints")]
    max_hints: u32,

    /// Seed for word and hint draws; random when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,

    /// Newline-separated word list; the built-in dictionary when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    word_list: Option<PathBuf>,

    /// Ring the terminal bell on misses and losses.
    #[serde(default = "default_sound")]
    sound: bool,

    /// Where the TUI writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Forfeit templates containing `{category}`; built-in phrases when empty.
    #[serde(default)]
    farewell_templates: Vec<String>,

    /// Ordered categories, one life each except the last.
    #[serde(default = "programming_languages")]
    categories: Vec<Category>,
}

#[instrument]
fn default_max_hints() -> u32 {
    DEFAULT_MAX_HINTS
}

#[instrument]
fn default_sound() -> bool {
    true
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_endgame.log")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_hints: default_max_hints(),
            seed: None,
            word_list: None,
            sound: default_sound(),
            log_file: default_log_file(),
            farewell_templates: Vec::new(),
            categories: programming_languages(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

        info!(
            categories = settings.categories.len(),
            max_hints = settings.max_hints,
            "Settings loaded successfully"
        );
        Ok(settings)
    }

    /// Loads settings from `path` if it exists, defaults otherwise.
    #[instrument(fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Renders the settings as TOML.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        toml::to_string_pretty(self)
            .map_err(|e| SettingsError::new(format!("Failed to serialize settings: {}", e)))
    }

    /// Overrides the seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Overrides the word list.
    pub fn with_word_list(mut self, word_list: Option<PathBuf>) -> Self {
        if word_list.is_some() {
            self.word_list = word_list;
        }
        self
    }

    /// Overrides the bell.
    pub fn with_sound(mut self, sound: bool) -> Self {
        self.sound = sound;
        self
    }

    /// Engine configuration derived from these settings.
    pub fn game_config(&self) -> GameConfig {
        GameConfig::new(self.categories.clone(), self.max_hints)
    }

    /// Loads the configured word list.
    #[instrument(skip(self))]
    pub fn words(&self, rng: GameRng) -> Result<WordList, SettingsError> {
        match &self.word_list {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|e| {
                    SettingsError::new(format!(
                        "Failed to read word list {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                let words = WordList::from_text(&text, rng).map_err(|e| {
                    SettingsError::new(format!(
                        "Invalid word list {}: {}",
                        path.display(),
                        e.message
                    ))
                })?;
                info!(path = %path.display(), count = words.len(), "Word list loaded");
                Ok(words)
            }
            None => Ok(WordList::builtin(rng)),
        }
    }

    /// Builds an engine wired to the configured collaborators.
    #[instrument(skip(self), fields(seed = ?self.seed))]
    pub fn build_engine(&self) -> Result<Engine, SettingsError> {
        let word_rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let hint_rng = GameRng::new(word_rng.seed().wrapping_add(HINT_SEED_OFFSET));
        info!(seed = word_rng.seed(), "Building engine");

        let words = self.words(word_rng)?;
        let phrases = FarewellPhrases::new(self.farewell_templates.clone());
        Ok(Engine::new(self.game_config(), words, hint_rng, phrases)?)
    }
}

/// Settings error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<EngineError> for SettingsError {
    #[track_caller]
    fn from(err: EngineError) -> Self {
        Self::new(format!("Engine error: {}", err))
    }
}
