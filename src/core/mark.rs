//! Cell marks.
//!
//! A cell holds a cube that is blank or carries one of the two player
//! symbols. On the wire a mark is a single-character string: `"X"` for the
//! first player, `"O"` for the second and `" "` for a blank cube.

use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// The content of one board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Cube carrying the first player's symbol.
    #[serde(rename = "X")]
    FirstPlayer,
    /// Cube carrying the second player's symbol.
    #[serde(rename = "O")]
    SecondPlayer,
    /// Blank cube.
    #[default]
    #[serde(rename = " ")]
    Empty,
}

impl Mark {
    /// Both player marks, in seating order.
    pub const PLAYERS: [Mark; 2] = [Mark::FirstPlayer, Mark::SecondPlayer];

    /// Wire symbol for this mark.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Mark::FirstPlayer => "X",
            Mark::SecondPlayer => "O",
            Mark::Empty => " ",
        }
    }

    /// Parse a wire symbol.
    ///
    /// ```
    /// use quixo_engine::core::Mark;
    ///
    /// assert_eq!(Mark::from_symbol("O").unwrap(), Mark::SecondPlayer);
    /// assert!(Mark::from_symbol("x").is_err());
    /// ```
    pub fn from_symbol(symbol: &str) -> Result<Self, BoardError> {
        match symbol {
            "X" => Ok(Mark::FirstPlayer),
            "O" => Ok(Mark::SecondPlayer),
            " " => Ok(Mark::Empty),
            other => Err(BoardError::InvalidMark(other.to_string())),
        }
    }

    /// True for the two player marks.
    #[must_use]
    pub const fn is_player(self) -> bool {
        !matches!(self, Mark::Empty)
    }

    /// The other player's mark. `Empty` has no opponent.
    #[must_use]
    pub const fn opponent(self) -> Option<Mark> {
        match self {
            Mark::FirstPlayer => Some(Mark::SecondPlayer),
            Mark::SecondPlayer => Some(Mark::FirstPlayer),
            Mark::Empty => None,
        }
    }

    /// Seat index (0 or 1) of a player mark.
    #[must_use]
    pub const fn seat(self) -> Option<usize> {
        match self {
            Mark::FirstPlayer => Some(0),
            Mark::SecondPlayer => Some(1),
            Mark::Empty => None,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
