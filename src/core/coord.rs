//! Board coordinates and push directions.
//!
//! ## Coord
//!
//! External 1-based `(x, y)` pair as sent by players and the remote service.
//! `x` selects the row and `y` the column. A `Coord` is not validated on
//! construction; `Coord::to_index` is the single place where it is checked
//! against the board and translated to 0-based indices.
//!
//! ## Direction
//!
//! The four push directions. Keywords are accepted in English and in the
//! French vocabulary used by the remote service.

use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// Number of rows and columns on a Quixo board.
pub const BOARD_SIZE: usize = 5;

/// A 1-based board position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row, 1 at the top.
    pub x: usize,
    /// Column, 1 at the left.
    pub y: usize,
}

impl Coord {
    /// Create a coordinate. No range check happens here.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Translate to 0-based `(row, col)` indices.
    ///
    /// ```
    /// use quixo_engine::core::Coord;
    ///
    /// assert_eq!(Coord::new(1, 5).to_index().unwrap(), (0, 4));
    /// assert!(Coord::new(0, 3).to_index().is_err());
    /// ```
    pub fn to_index(self) -> Result<(usize, usize), BoardError> {
        if (1..=BOARD_SIZE).contains(&self.x) && (1..=BOARD_SIZE).contains(&self.y) {
            Ok((self.x - 1, self.y - 1))
        } else {
            Err(BoardError::OutOfRange {
                x: self.x,
                y: self.y,
            })
        }
    }

    /// Build from 0-based indices.
    #[must_use]
    pub const fn from_index(row: usize, col: usize) -> Self {
        Self {
            x: row + 1,
            y: col + 1,
        }
    }

    /// Iterate over all 25 board positions, row by row.
    pub fn all() -> impl Iterator<Item = Coord> {
        (1..=BOARD_SIZE).flat_map(|x| (1..=BOARD_SIZE).map(move |y| Coord::new(x, y)))
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Keyword set used when rendering a direction for the remote service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vocabulary {
    /// `up`, `down`, `left`, `right`.
    English,
    /// `haut`, `bas`, `gauche`, `droite`.
    #[default]
    French,
}

/// Push direction of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Keyword for this direction in the given vocabulary.
    #[must_use]
    pub const fn keyword(self, vocabulary: Vocabulary) -> &'static str {
        match (vocabulary, self) {
            (Vocabulary::English, Direction::Up) => "up",
            (Vocabulary::English, Direction::Down) => "down",
            (Vocabulary::English, Direction::Left) => "left",
            (Vocabulary::English, Direction::Right) => "right",
            (Vocabulary::French, Direction::Up) => "haut",
            (Vocabulary::French, Direction::Down) => "bas",
            (Vocabulary::French, Direction::Left) => "gauche",
            (Vocabulary::French, Direction::Right) => "droite",
        }
    }

    /// True for directions that shift along a column.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

impl std::str::FromStr for Direction {
    type Err = BoardError;

    /// Parse an English or French keyword, ignoring case and surrounding
    /// whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" | "haut" => Ok(Direction::Up),
            "down" | "bas" => Ok(Direction::Down),
            "left" | "gauche" => Ok(Direction::Left),
            "right" | "droite" => Ok(Direction::Right),
            _ => Err(BoardError::InvalidDirection(s.to_string())),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword(Vocabulary::English))
    }
}
