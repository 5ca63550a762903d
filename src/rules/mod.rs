//! Quixo rules evaluated over a board.
//!
//! Rules are pure functions of a `Board` so that matches, choosers and tests
//! share one definition:
//! - `legality`: which cube a player may take and where it may go
//! - `win`: complete lines and the tie-break between them

pub mod legality;
pub mod win;

pub use legality::{check_move, legal_moves, LegalMoves, MAX_LEGAL_MOVES};
pub use win::detect_winner;
