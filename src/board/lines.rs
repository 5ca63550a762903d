//! Scoring lines: 5 rows, 5 columns and the two main diagonals.

use smallvec::SmallVec;

use super::Board;
use crate::core::{Coord, Mark, BOARD_SIZE};

/// One of the 12 five-cell lines that can win a match.
///
/// Row and column numbers are 1-based like `Coord`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Line {
    Row(usize),
    Column(usize),
    /// (1, 1) to (5, 5).
    Diagonal,
    /// (1, 5) to (5, 1).
    AntiDiagonal,
}

impl Line {
    /// All 12 lines: rows, then columns, then the two diagonals.
    pub fn all() -> impl Iterator<Item = Line> {
        (1..=BOARD_SIZE)
            .map(Line::Row)
            .chain((1..=BOARD_SIZE).map(Line::Column))
            .chain([Line::Diagonal, Line::AntiDiagonal])
    }

    /// The five cells of this line.
    #[must_use]
    pub fn cells(self) -> [Coord; BOARD_SIZE] {
        let mut cells = [Coord::new(1, 1); BOARD_SIZE];
        for (i, cell) in cells.iter_mut().enumerate() {
            let n = i + 1;
            *cell = match self {
                Line::Row(x) => Coord::new(x, n),
                Line::Column(y) => Coord::new(n, y),
                Line::Diagonal => Coord::new(n, n),
                Line::AntiDiagonal => Coord::new(n, BOARD_SIZE + 1 - n),
            };
        }
        cells
    }

    /// The mark filling all five cells, if any. Empty lines have no owner.
    #[must_use]
    pub fn owner(self, board: &Board) -> Option<Mark> {
        let mut marks = self.cells().into_iter().map(|c| board.get(c));
        let first = marks.next()?.ok()?;
        if !first.is_player() {
            return None;
        }
        marks
            .all(|m| m == Ok(first))
            .then_some(first)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Row(x) => write!(f, "row {x}"),
            Line::Column(y) => write!(f, "column {y}"),
            Line::Diagonal => f.write_str("diagonal"),
            Line::AntiDiagonal => f.write_str("anti-diagonal"),
        }
    }
}

/// Every complete line on the board with the mark that fills it.
#[must_use]
pub fn complete_lines(board: &Board) -> SmallVec<[(Line, Mark); 4]> {
    Line::all()
        .filter_map(|line| line.owner(board).map(|mark| (line, mark)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_lines() {
        assert_eq!(Line::all().count(), 12);
    }

    #[test]
    fn test_line_cells() {
        assert_eq!(
            Line::Row(2).cells(),
            [
                Coord::new(2, 1),
                Coord::new(2, 2),
                Coord::new(2, 3),
                Coord::new(2, 4),
                Coord::new(2, 5)
            ]
        );
        assert_eq!(Line::Column(4).cells()[4], Coord::new(5, 4));
        assert_eq!(Line::AntiDiagonal.cells()[0], Coord::new(1, 5));
        assert_eq!(Line::AntiDiagonal.cells()[4], Coord::new(5, 1));
    }

    #[test]
    fn test_empty_board_has_no_lines() {
        assert!(complete_lines(&Board::new()).is_empty());
    }

    #[test]
    fn test_detects_each_kind_of_line() {
        for line in Line::all() {
            let mut board = Board::new();
            for cell in line.cells() {
                board.write(cell.x, cell.y, Mark::SecondPlayer).unwrap();
            }
            let lines = complete_lines(&board);
            assert_eq!(lines.as_slice(), &[(line, Mark::SecondPlayer)], "{line}");
        }
    }

    #[test]
    fn test_mixed_line_is_not_complete() {
        let mut board = Board::new();
        for y in 1..=4 {
            board.write(1, y, Mark::FirstPlayer).unwrap();
        }
        board.write(1, 5, Mark::SecondPlayer).unwrap();

        assert_eq!(Line::Row(1).owner(&board), None);
    }

    #[test]
    fn test_full_board_completes_every_line() {
        let board = Board::from_grid([[Mark::FirstPlayer; BOARD_SIZE]; BOARD_SIZE]);
        assert_eq!(complete_lines(&board).len(), 12);
    }
}
