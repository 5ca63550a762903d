//! # quixo-engine
//!
//! Board mutation and win detection for Quixo, a two-player game on a 5×5
//! grid of cubes. A move takes a blank or own cube on the border, marks it,
//! and pushes it back in from one end of its line, shifting the other cubes
//! along.
//!
//! ## Design Principles
//!
//! 1. **One mutation path**: the board changes only through `insert`, which
//!    validates the whole segment before writing anything.
//!
//! 2. **Pure rules**: legality and win detection are functions of a `Board`,
//!    shared by matches, choosers and tests.
//!
//! 3. **Matches are independent**: a `Match` owns its board; hosts running
//!    many matches keep them in a `MatchRegistry`, one lock per match.
//!
//! ## Coordinates
//!
//! Positions are 1-based `(x, y)` with `x` the row and `y` the column.
//! `Up` and `Down` shift the five cells from `(x, y)` to `(x + 4, y)`;
//! `Left` and `Right` shift `(x, y)` to `(x, y + 4)`.
//!
//! ## Modules
//!
//! - `core`: marks, coordinates, directions, players, moves, RNG, configuration
//! - `board`: the 5×5 grid, the insertion primitive and line enumeration
//! - `rules`: move legality and winner detection with tie-breaking
//! - `game`: the `Match` state machine and the concurrent `MatchRegistry`
//! - `chooser`: pluggable move choosers for automated players
//! - `protocol`: JSON shapes for a remote game server
//! - `error`: error types
//!
//! ## Logging
//!
//! The engine emits `tracing` events and spans but never installs a
//! subscriber. Without one, it is silent.

pub mod board;
pub mod chooser;
pub mod core;
pub mod error;
pub mod game;
pub mod protocol;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Coord, Direction, GameRng, MatchConfig, Mark, Move, MoveRecord, Players, TieBreak,
    Vocabulary, BOARD_SIZE,
};

pub use crate::board::{complete_lines, Board, Grid, Line};

pub use crate::rules::{check_move, detect_winner, legal_moves, LegalMoves};

pub use crate::game::{Match, MatchHandle, MatchRegistry, MatchSnapshot, MatchStatus};

pub use crate::chooser::{play_turn, FirstLegalChooser, MoveChooser, UniformChooser};

pub use crate::protocol::{GameResponse, MatchPayload, MoveRequest};

pub use crate::error::{
    BoardError, ConfigError, MoveError, ProtocolError, RegistryError, SetupError,
};
