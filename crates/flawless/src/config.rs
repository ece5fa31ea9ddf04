//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use flawless_tictactoe::Player;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a terminal game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Who opens each game.
    #[serde(default = "default_first_player")]
    first_player: Player,

    /// Character drawn for the human's marks.
    #[serde(default = "default_human_mark")]
    human_mark: char,

    /// Character drawn for the computer's marks.
    #[serde(default = "default_computer_mark")]
    computer_mark: char,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_first_player() -> Player {
    Player::Human
}

fn default_human_mark() -> char {
    'O'
}

fn default_computer_mark() -> char {
    'X'
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: default_first_player(),
            human_mark: default_human_mark(),
            computer_mark: default_computer_mark(),
            log_filter: default_log_filter(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(first_player = %config.first_player, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns a copy with a different opening player.
    pub fn with_first_player(mut self, first_player: Player) -> Self {
        self.first_player = first_player;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for mark in [self.human_mark, self.computer_mark] {
            if mark.is_whitespace() || mark == '.' {
                return Err(ConfigError::new(format!(
                    "Mark {:?} cannot be told apart from an empty cell",
                    mark
                )));
            }
        }
        if self.human_mark == self.computer_mark {
            return Err(ConfigError::new(format!(
                "Human and computer share the mark {:?}",
                self.human_mark
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
