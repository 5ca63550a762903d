//! Match configuration.
//!
//! Drivers configure a match once at construction:
//! - `TieBreak`: who wins when one insertion completes lines for both marks
//! - `first_to_move`: which mark opens the match
//! - `enforce_turn_order`: whether Match checks the acting player's turn
//! - `vocabulary`: keywords used for outbound move requests
//!
//! The config is loadable from TOML; missing keys fall back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::coord::Vocabulary;
use super::mark::Mark;
use crate::error::ConfigError;

/// Winner policy when a single move leaves complete lines for both marks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// The player who moved wins if they own a complete line.
    #[default]
    MoverPriority,
    /// Completing the opponent's line hands them the win, even if the
    /// mover also completed their own.
    OpponentPriority,
}

/// Configuration for a single match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Tie-break policy for simultaneous lines.
    pub tie_break: TieBreak,

    /// Mark that moves first. Must be a player mark.
    pub first_to_move: Mark,

    /// Reject moves from the player whose turn it is not.
    pub enforce_turn_order: bool,

    /// Direction keywords used on the wire.
    pub vocabulary: Vocabulary,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::MoverPriority,
            first_to_move: Mark::FirstPlayer,
            enforce_turn_order: true,
            vocabulary: Vocabulary::French,
        }
    }
}

impl MatchConfig {
    /// Set the tie-break policy.
    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Set the opening mark.
    #[must_use]
    pub fn with_first_to_move(mut self, mark: Mark) -> Self {
        self.first_to_move = mark;
        self
    }

    /// Enable or disable turn checks.
    #[must_use]
    pub fn with_turn_order(mut self, enforce: bool) -> Self {
        self.enforce_turn_order = enforce;
        self
    }

    /// Set the outbound keyword vocabulary.
    #[must_use]
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.first_to_move.is_player() {
            return Err(ConfigError::Validation(
                "first_to_move must be \"X\" or \"O\"".into(),
            ));
        }
        Ok(())
    }

    /// Render the default configuration as TOML.
    pub fn default_toml() -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(&MatchConfig::default())?)
    }
}
