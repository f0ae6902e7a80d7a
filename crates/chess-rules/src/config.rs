//! Game configuration loading.
//!
//! A [`GameConfig`] describes how a new [`Game`](crate::Game) starts. It is
//! usually read from a small TOML file:
//!
//! ```toml
//! start_fen = "4k3/8/8/8/8/8/4P3/4K3 w"
//! record_history = true
//! ```

use crate::Position;
use chess_core::FenError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors that can occur when loading or applying configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The configured start position is not valid FEN.
    #[error("Invalid start position: {0}")]
    InvalidStartFen(#[from] FenError),
}

/// Settings for a new game.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GameConfig {
    /// Start position in FEN. Defaults to the standard initial position.
    #[serde(default)]
    pub start_fen: Option<String>,
    /// Whether played moves are kept in the game history. Defaults to true.
    #[serde(default = "default_record_history")]
    pub record_history: bool,
}

fn default_record_history() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            start_fen: None,
            record_history: default_record_history(),
        }
    }
}

impl GameConfig {
    /// Loads a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read, or
    /// [`ConfigError::ParseError`] if it contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!(path = %path.display(), start_fen = ?config.start_fen, "loaded game config");
        Ok(config)
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the position a game with this configuration starts from.
    pub fn initial_position(&self) -> Result<Position, ConfigError> {
        match &self.start_fen {
            Some(fen) => Ok(Position::from_fen(fen)?),
            None => Ok(Position::startpos()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Color;
    use std::io::Write;

    #[test]
    fn empty_config_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert!(config.record_history);
        assert_eq!(config.initial_position().unwrap(), Position::startpos());
    }

    #[test]
    fn custom_start_position() {
        let config = GameConfig::from_toml_str(
            r#"
start_fen = "4k3/8/8/8/8/8/4P3/4K3 b"
record_history = false
"#,
        )
        .unwrap();
        assert!(!config.record_history);
        let position = config.initial_position().unwrap();
        assert_eq!(position.side_to_move, Color::Black);
        assert_eq!(position.occupied_count(), 3);
    }

    #[test]
    fn invalid_start_fen() {
        let config = GameConfig {
            start_fen: Some("not a fen".to_string()),
            ..GameConfig::default()
        };
        assert!(matches!(
            config.initial_position(),
            Err(ConfigError::InvalidStartFen(_))
        ));
    }

    #[test]
    fn invalid_toml() {
        assert!(matches!(
            GameConfig::from_toml_str("record_history = maybe"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "start_fen = \"7k/P7/8/8/8/8/8/K7 w\"").unwrap();
        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.start_fen.as_deref(), Some("7k/P7/8/8/8/8/8/K7 w"));
        assert!(config.record_history);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            GameConfig::load(dir.path().join("game.toml")),
            Err(ConfigError::ReadError(_))
        ));
    }

    #[test]
    fn toml_roundtrip() {
        let config = GameConfig {
            start_fen: Some("8/8/8/8/8/8/8/K6k w".to_string()),
            record_history: false,
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(GameConfig::from_toml_str(&text).unwrap(), config);
    }
}
