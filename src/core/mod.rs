//! Core value types: marks, coordinates, directions, players, moves, RNG,
//! configuration.
//!
//! Everything here is a plain value; the board and match build on top.

pub mod action;
pub mod config;
pub mod coord;
pub mod mark;
pub mod player;
pub mod rng;

pub use action::{Move, MoveRecord};
pub use config::{MatchConfig, TieBreak};
pub use coord::{Coord, Direction, Vocabulary, BOARD_SIZE};
pub use mark::Mark;
pub use player::Players;
pub use rng::GameRng;
