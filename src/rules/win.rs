//! Win detection.
//!
//! A match is won when one of the 12 lines holds five cubes of the same
//! player mark. A single insertion can leave complete lines for both marks
//! at once; `TieBreak` decides who wins in that case.

use tracing::instrument;

use crate::board::{complete_lines, Board};
use crate::core::{Mark, TieBreak};

/// Find the winner of `board` after `mover` played.
///
/// Returns `None` when no line is complete. When both marks own a complete
/// line, `MoverPriority` picks `mover` and `OpponentPriority` picks the
/// other mark. If `mover` is `Mark::Empty` (no move known), "X" is preferred.
///
/// ```
/// use quixo_engine::board::Board;
/// use quixo_engine::core::{Mark, TieBreak};
/// use quixo_engine::rules::detect_winner;
///
/// let mut board = Board::new();
/// for y in 1..=5 {
///     board.write(3, y, Mark::FirstPlayer).unwrap();
/// }
/// assert_eq!(
///     detect_winner(&board, Mark::SecondPlayer, TieBreak::MoverPriority),
///     Some(Mark::FirstPlayer)
/// );
/// ```
#[instrument(level = "trace", skip(board))]
pub fn detect_winner(board: &Board, mover: Mark, tie_break: TieBreak) -> Option<Mark> {
    let lines = complete_lines(board);
    if lines.is_empty() {
        return None;
    }

    let preferred = match (mover.opponent(), tie_break) {
        (Some(opponent), TieBreak::MoverPriority) => [mover, opponent],
        (Some(opponent), TieBreak::OpponentPriority) => [opponent, mover],
        (None, _) => Mark::PLAYERS,
    };

    preferred
        .into_iter()
        .find(|&mark| lines.iter().any(|&(_, owner)| owner == mark))
}
