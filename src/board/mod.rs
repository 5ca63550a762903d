//! The 5×5 Quixo board.
//!
//! `Board` owns the grid of marks and is the only place the grid is mutated.
//! External callers address cells with 1-based coordinates; the translation to
//! the internal 0-based array happens once, in `Coord::to_index`, so the four
//! insertion directions share one range check.
//!
//! ## Insertion
//!
//! `insert(mark, origin, direction)` shifts the five-cell segment that starts
//! at `origin` and runs toward increasing row (`Up`/`Down`) or increasing
//! column (`Left`/`Right`):
//!
//! - `Down` / `Right`: every cube moves one step away from the origin, the far
//!   cube falls off and `mark` lands on the origin.
//! - `Up` / `Left`: every cube moves one step toward the origin, the origin
//!   cube falls off and `mark` lands on the far end.
//!
//! The segment must fit on the board. It is checked as a whole before any
//! cell is written, so a rejected insertion leaves the board untouched.
//!
//! Board never checks who owns the origin cube; that is a match rule.

mod lines;

pub use lines::{complete_lines, Line};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Coord, Direction, Mark, BOARD_SIZE};
use crate::error::BoardError;

/// Owned copy of the board contents, indexed `[row][col]` from 0.
pub type Grid = [[Mark; BOARD_SIZE]; BOARD_SIZE];

/// Fixed 5×5 matrix of marks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: Grid,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Create a board from a typed grid. A `Grid` cannot be malformed.
    #[must_use]
    pub fn from_grid(cells: Grid) -> Self {
        Self { cells }
    }

    /// Build a board from wire symbols (`"X"`, `"O"`, `" "`).
    ///
    /// Fails with `MalformedGrid` unless there are exactly 5 rows of 5
    /// cells, and with `InvalidMark` on any other symbol.
    ///
    /// ```
    /// use quixo_engine::board::Board;
    /// use quixo_engine::core::Mark;
    ///
    /// let rows = vec![
    ///     vec!["X", " ", " ", " ", "O"],
    ///     vec![" "; 5],
    ///     vec![" "; 5],
    ///     vec![" "; 5],
    ///     vec![" "; 5],
    /// ];
    /// let board = Board::from_symbols(&rows).unwrap();
    /// assert_eq!(board.read(1, 5).unwrap(), Mark::SecondPlayer);
    /// ```
    pub fn from_symbols<R, S>(rows: &[R]) -> Result<Self, BoardError>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        if rows.len() != BOARD_SIZE {
            return Err(BoardError::MalformedGrid(format!(
                "expected {BOARD_SIZE} rows, got {}",
                rows.len()
            )));
        }

        let mut board = Self::new();
        for (row, symbols) in rows.iter().enumerate() {
            let symbols = symbols.as_ref();
            if symbols.len() != BOARD_SIZE {
                return Err(BoardError::MalformedGrid(format!(
                    "row {} has {} cells, expected {BOARD_SIZE}",
                    row + 1,
                    symbols.len()
                )));
            }
            for (col, symbol) in symbols.iter().enumerate() {
                board.cells[row][col] = Mark::from_symbol(symbol.as_ref())?;
            }
        }
        Ok(board)
    }

    /// Read the mark at 1-based `(x, y)`.
    pub fn read(&self, x: usize, y: usize) -> Result<Mark, BoardError> {
        self.get(Coord::new(x, y))
    }

    /// Read the mark at `coord`.
    pub fn get(&self, coord: Coord) -> Result<Mark, BoardError> {
        Ok(self.at(coord.to_index()?))
    }

    /// Write `mark` at 1-based `(x, y)`.
    pub fn write(&mut self, x: usize, y: usize, mark: Mark) -> Result<(), BoardError> {
        let index = Coord::new(x, y).to_index()?;
        self.set(index, mark);
        Ok(())
    }

    /// Write a wire symbol at 1-based `(x, y)`.
    ///
    /// The range check comes first, then the symbol check.
    pub fn write_symbol(&mut self, x: usize, y: usize, symbol: &str) -> Result<(), BoardError> {
        let index = Coord::new(x, y).to_index()?;
        let mark = Mark::from_symbol(symbol)?;
        self.set(index, mark);
        Ok(())
    }

    /// Independent copy of the grid. Mutating it never affects the board.
    #[must_use]
    pub fn snapshot(&self) -> Grid {
        self.cells
    }

    /// Grid as wire symbols, row by row.
    #[must_use]
    pub fn to_symbols(&self) -> Vec<Vec<String>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|m| m.symbol().to_string()).collect())
            .collect()
    }

    /// Number of cells holding `mark`.
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().flatten().filter(|&&m| m == mark).count()
    }

    /// Check that an insertion from `origin` toward `direction` fits on the
    /// board, without touching any cell.
    pub fn check_insert(&self, origin: Coord, direction: Direction) -> Result<(), BoardError> {
        segment(origin, direction).map(|_| ())
    }

    /// Insert `mark` along the segment starting at `origin`.
    ///
    /// Returns the mark pushed off the segment.
    ///
    /// ```
    /// use quixo_engine::board::Board;
    /// use quixo_engine::core::{Coord, Direction, Mark};
    ///
    /// let mut board = Board::new();
    /// board.write(5, 1, Mark::SecondPlayer).unwrap();
    ///
    /// let discarded = board.insert(Mark::FirstPlayer, Coord::new(1, 1), Direction::Down).unwrap();
    /// assert_eq!(discarded, Mark::SecondPlayer);
    /// assert_eq!(board.read(1, 1).unwrap(), Mark::FirstPlayer);
    /// ```
    pub fn insert(
        &mut self,
        mark: Mark,
        origin: Coord,
        direction: Direction,
    ) -> Result<Mark, BoardError> {
        if !mark.is_player() {
            return Err(BoardError::InvalidMark(mark.symbol().to_string()));
        }
        let seg = segment(origin, direction)?;
        let last = BOARD_SIZE - 1;

        let discarded = match direction {
            Direction::Down | Direction::Right => self.push_away(&seg, mark),
            Direction::Up | Direction::Left => self.pull_toward(&seg, mark),
        };

        debug!(
            %mark,
            %origin,
            %direction,
            %discarded,
            far = %Coord::from_index(seg[last].0, seg[last].1),
            "inserted cube"
        );
        Ok(discarded)
    }

    /// Shift toward the far end; `mark` fills the origin.
    fn push_away(&mut self, seg: &Segment, mark: Mark) -> Mark {
        let discarded = self.at(seg[BOARD_SIZE - 1]);
        for i in (1..BOARD_SIZE).rev() {
            self.set(seg[i], self.at(seg[i - 1]));
        }
        self.set(seg[0], mark);
        discarded
    }

    /// Shift toward the origin; `mark` fills the far end.
    fn pull_toward(&mut self, seg: &Segment, mark: Mark) -> Mark {
        let discarded = self.at(seg[0]);
        for i in 0..BOARD_SIZE - 1 {
            self.set(seg[i], self.at(seg[i + 1]));
        }
        self.set(seg[BOARD_SIZE - 1], mark);
        discarded
    }

    pub(crate) fn at(&self, (row, col): (usize, usize)) -> Mark {
        self.cells[row][col]
    }

    fn set(&mut self, (row, col): (usize, usize), mark: Mark) {
        self.cells[row][col] = mark;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// 0-based indices of the cells touched by one insertion, origin first.
type Segment = [(usize, usize); BOARD_SIZE];

fn segment(origin: Coord, direction: Direction) -> Result<Segment, BoardError> {
    let (row, col) = origin.to_index()?;

    let mut seg = [(row, col); BOARD_SIZE];
    for (i, cell) in seg.iter_mut().enumerate() {
        *cell = if direction.is_vertical() {
            (row + i, col)
        } else {
            (row, col + i)
        };
    }

    let (far_row, far_col) = seg[BOARD_SIZE - 1];
    if far_row >= BOARD_SIZE || far_col >= BOARD_SIZE {
        return Err(BoardError::OutOfRange {
            x: far_row + 1,
            y: far_col + 1,
        });
    }
    Ok(seg)
}
