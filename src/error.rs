//! Error types.
//!
//! Every failure in the engine is a value. Nothing here is retried: these are
//! correctness errors surfaced to the caller, not transient failures.

use std::path::PathBuf;

use crate::core::{Coord, Mark};

/// Errors raised by the board primitive.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("position ({x}, {y}) is outside the board, x and y must be between 1 and 5")]
    OutOfRange { x: usize, y: usize },

    #[error("invalid cube value {0:?}")]
    InvalidMark(String),

    #[error("invalid direction {0:?}, expected up, down, left or right")]
    InvalidDirection(String),

    #[error("malformed board: {0}")]
    MalformedGrid(String),
}

/// Errors raised when a move is rejected by a match.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("it is not {player}'s turn")]
    NotPlayersTurn { player: String },

    #[error("{0} is not playing in this match")]
    UnknownPlayer(String),

    #[error("the cube at {origin} belongs to the opponent")]
    OriginOwnedByOpponent { origin: Coord },

    #[error("the match is already won by {winner:?}")]
    MatchAlreadyWon { winner: Mark },

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Errors raised while building a match from external state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("a match needs exactly two players, got {0}")]
    WrongPlayerCount(usize),

    #[error("player {0:?} appears twice")]
    DuplicatePlayer(String),

    #[error("player names must not be empty")]
    EmptyPlayerName,

    #[error("invalid board: {0}")]
    Board(#[from] BoardError),

    #[error("invalid config: {0}")]
    Config(String),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors raised by the per-match registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("no match with id {0:?}")]
    UnknownMatch(String),

    #[error("a match with id {0:?} already exists")]
    DuplicateMatch(String),

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Errors raised while decoding remote-service payloads.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("server reports winner {reported:?} but the board gives {detected:?}")]
    WinnerMismatch {
        reported: Option<String>,
        detected: Option<String>,
    },
}
