//! Move representation: origin cube + push direction.
//!
//! A `Move` is built per turn and never persisted. Matches keep a
//! `MoveRecord` per applied move for history and replay checks.

use serde::{Deserialize, Serialize};

use super::coord::{Coord, Direction};
use super::mark::Mark;

/// A candidate move.
///
/// ```
/// use quixo_engine::core::{Coord, Direction, Move};
///
/// let mv = Move::new(Coord::new(1, 3), Direction::Down);
/// assert_eq!(mv.to_string(), "(1, 3) down");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Cube taken from the board.
    pub origin: Coord,

    /// Direction of the push.
    pub direction: Direction,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(origin: Coord, direction: Direction) -> Self {
        Self { origin, direction }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.origin, self.direction)
    }
}

/// An applied move with the metadata needed to audit it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Mark that was inserted.
    pub mark: Mark,

    /// The move.
    #[serde(rename = "move")]
    pub mv: Move,

    /// Turn number, starting at 1.
    pub turn: u32,

    /// Mark pushed off the line by the insertion.
    pub discarded: Mark,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(mark: Mark, mv: Move, turn: u32, discarded: Mark) -> Self {
        Self {
            mark,
            mv,
            turn,
            discarded,
        }
    }
}
