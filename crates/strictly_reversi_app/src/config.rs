//! Application configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use strictly_reversi::Board;
use tracing::{debug, info, instrument};

/// Settings loaded from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Board rows for new games.
    #[serde(default = "default_size")]
    rows: usize,

    /// Board columns for new games.
    #[serde(default = "default_size")]
    columns: usize,

    /// Where the current game is saved.
    #[serde(default = "default_save_path")]
    save_path: PathBuf,

    /// How long the computer "thinks" before moving.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,
}

fn default_size() -> usize {
    Board::STANDARD_SIZE
}

fn default_save_path() -> PathBuf {
    PathBuf::from("strictly_reversi.game")
}

fn default_computer_delay_ms() -> u64 {
    2000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rows: default_size(),
            columns: default_size(),
            save_path: default_save_path(),
            computer_delay_ms: default_computer_delay_ms(),
        }
    }
}

impl AppConfig {
    /// Widest board the terminal can address with column letters `a` to `z`.
    pub const MAX_COLUMNS: usize = 26;

    /// Computer thinking delay.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }

    /// Returns a copy saving to `save_path`.
    pub fn with_save_path(mut self, save_path: impl Into<PathBuf>) -> Self {
        self.save_path = save_path.into();
        self
    }

    /// Returns a copy with a different computer delay.
    pub fn with_computer_delay_ms(mut self, computer_delay_ms: u64) -> Self {
        self.computer_delay_ms = computer_delay_ms;
        self
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        Board::check_dimensions(config.rows, config.columns)
            .map_err(|e| ConfigError::new(format!("Invalid board size: {}", e)))?;
        if config.columns > Self::MAX_COLUMNS {
            return Err(ConfigError::new(format!(
                "Invalid board size: at most {} columns can be labelled, got {}",
                Self::MAX_COLUMNS,
                config.columns
            )));
        }

        info!(
            rows = config.rows,
            columns = config.columns,
            save_path = %config.save_path.display(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = AppConfig::from_toml("").expect("Valid config");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.computer_delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_partial_toml() {
        let config = AppConfig::from_toml("rows = 6\ncomputer_delay_ms = 10\n").expect("Valid config");
        assert_eq!(*config.rows(), 6);
        assert_eq!(*config.columns(), 8);
        assert_eq!(config.computer_delay(), Duration::from_millis(10));
    }

    #[test]
    fn test_invalid_board_size_rejected() {
        let err = AppConfig::from_toml("rows = 5").unwrap_err();
        assert!(err.message.contains("Invalid board size"));
    }

    #[test]
    fn test_columns_beyond_letters_rejected() {
        assert!(AppConfig::from_toml("columns = 26").is_ok());
        let err = AppConfig::from_toml("columns = 28").unwrap_err();
        assert!(err.message.contains("at most 26 columns"));
    }

    #[test]
    fn test_bad_toml_rejected() {
        let err = AppConfig::from_toml("rows = \"eight\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = AppConfig::load_or_default("/nonexistent/strictly_reversi.toml")
            .expect("Defaults");
        assert_eq!(config, AppConfig::default());
    }
}
