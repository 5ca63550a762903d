//! Move legality that depends only on the board.
//!
//! A player may take a blank cube or one of their own, never the
//! opponent's. The insertion segment must also fit on the board. Turn order
//! and terminal state are match concerns and are checked by `Match`.

use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{Coord, Direction, Mark, Move};
use crate::error::{BoardError, MoveError};

/// Upper bound on legal moves in one position. Only row 1 and column 1
/// can start a segment that fits, in two directions each.
pub const MAX_LEGAL_MOVES: usize = 20;

/// Legal moves for one mark.
pub type LegalMoves = SmallVec<[Move; MAX_LEGAL_MOVES]>;

/// Check `mv` for the player holding `mark` without touching the board.
///
/// Failure order: unusable mark, origin outside the board, origin owned by
/// the opponent, segment leaving the board.
pub fn check_move(board: &Board, mark: Mark, mv: Move) -> Result<(), MoveError> {
    let Some(opponent) = mark.opponent() else {
        return Err(BoardError::InvalidMark(mark.symbol().to_string()).into());
    };

    if board.get(mv.origin)? == opponent {
        return Err(MoveError::OriginOwnedByOpponent { origin: mv.origin });
    }

    board.check_insert(mv.origin, mv.direction)?;
    Ok(())
}

/// Every move `mark` could legally play, in board scan order
/// (row by row, then `Up`, `Down`, `Left`, `Right`).
#[must_use]
pub fn legal_moves(board: &Board, mark: Mark) -> LegalMoves {
    Coord::all()
        .flat_map(|origin| Direction::ALL.map(|direction| Move::new(origin, direction)))
        .filter(|&mv| check_move(board, mark, mv).is_ok())
        .collect()
}
