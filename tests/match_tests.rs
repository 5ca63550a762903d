//! Match integration tests.
//!
//! These tests verify turn handling, terminal state and the double-line
//! tie-break through `Match::apply_move`.

use quixo_engine::board::Board;
use quixo_engine::core::{Coord, Direction, Mark, MatchConfig, Players, TieBreak};
use quixo_engine::error::{BoardError, MoveError};
use quixo_engine::game::{Match, MatchStatus};

fn players() -> Players {
    Players::new("ana", "bob").unwrap()
}

fn board(rows: [&str; 5]) -> Board {
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.chars().map(|c| c.to_string()).collect())
        .collect();
    Board::from_symbols(&rows).unwrap()
}

/// Row 1 is one X short and row 4 is one O short. Pushing X down column 3
/// completes row 1 and drops the O from (3, 3) into row 4.
fn double_line_setup() -> Board {
    board([
        "XX XX",
        "     ",
        "  O  ",
        "OO OO",
        "     ",
    ])
}

// =============================================================================
// Rejections
// =============================================================================

/// Taking an opponent's cube is refused and nothing changes.
#[test]
fn test_opponent_origin_rejected_without_mutation() {
    let mut game = Match::new(players());
    game.apply_move("ana", Coord::new(1, 2), Direction::Down).unwrap();
    let before = game.snapshot();

    assert_eq!(
        game.apply_move("bob", Coord::new(1, 2), Direction::Up),
        Err(MoveError::OriginOwnedByOpponent {
            origin: Coord::new(1, 2)
        })
    );
    assert_eq!(game.snapshot(), before);
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.to_move(), Mark::SecondPlayer);
}

/// Check order: turn before range, range before ownership.
#[test]
fn test_rejection_order() {
    let mut game = Match::new(players());
    game.apply_move("ana", Coord::new(1, 1), Direction::Down).unwrap();

    assert_eq!(
        game.validate_move("ana", Coord::new(9, 9), Direction::Down),
        Err(MoveError::NotPlayersTurn {
            player: "ana".to_string()
        })
    );
    assert_eq!(
        game.validate_move("bob", Coord::new(0, 1), Direction::Down),
        Err(MoveError::Board(BoardError::OutOfRange { x: 0, y: 1 }))
    );
    assert_eq!(
        game.validate_move("bob", Coord::new(1, 1), Direction::Up),
        Err(MoveError::OriginOwnedByOpponent {
            origin: Coord::new(1, 1)
        })
    );
    assert_eq!(
        game.validate_move("bob", Coord::new(2, 2), Direction::Down),
        Err(MoveError::Board(BoardError::OutOfRange { x: 6, y: 2 }))
    );
}

// =============================================================================
// Terminal state
// =============================================================================

/// Once won, every move fails and the board stays frozen.
#[test]
fn test_terminal_lock() {
    let start = board([
        "     ",
        "X    ",
        "X    ",
        "X    ",
        "X    ",
    ]);
    let mut game = Match::from_state(players(), start, MatchConfig::default()).unwrap();

    let status = game.apply_move("ana", Coord::new(1, 1), Direction::Up).unwrap();
    assert_eq!(status, MatchStatus::Won(Mark::FirstPlayer));
    assert_eq!(game.detect_winner(), Some(Mark::FirstPlayer));

    let frozen = game.snapshot();
    for player in ["ana", "bob"] {
        assert_eq!(
            game.apply_move(player, Coord::new(1, 3), Direction::Down),
            Err(MoveError::MatchAlreadyWon {
                winner: Mark::FirstPlayer
            })
        );
    }
    assert_eq!(game.snapshot(), frozen);
    assert_eq!(game.snapshot().winner, Some(Mark::FirstPlayer));
}

/// A board with row 3 filled by X is already won when loaded.
#[test]
fn test_loaded_winning_board() {
    let start = board([
        "     ",
        "     ",
        "XXXXX",
        "     ",
        "     ",
    ]);
    let game = Match::from_state(players(), start, MatchConfig::default()).unwrap();

    assert_eq!(game.winner(), Some(Mark::FirstPlayer));
    assert_eq!(game.winner_name(), Some("ana"));
}

// =============================================================================
// Double line
// =============================================================================

/// A move completing lines for both sides is won by the mover by default.
#[test]
fn test_double_line_goes_to_mover() {
    let mut game =
        Match::from_state(players(), double_line_setup(), MatchConfig::default()).unwrap();
    assert_eq!(game.status(), MatchStatus::InProgress);

    let status = game.apply_move("ana", Coord::new(1, 3), Direction::Down).unwrap();

    assert_eq!(game.board().read(1, 3), Ok(Mark::FirstPlayer));
    assert_eq!(game.board().read(4, 3), Ok(Mark::SecondPlayer));
    assert_eq!(status, MatchStatus::Won(Mark::FirstPlayer));
}

/// Opponent priority hands the same position to the other side.
#[test]
fn test_double_line_opponent_priority() {
    let config = MatchConfig::default().with_tie_break(TieBreak::OpponentPriority);
    let mut game = Match::from_state(players(), double_line_setup(), config).unwrap();

    let status = game.apply_move("ana", Coord::new(1, 3), Direction::Down).unwrap();

    assert_eq!(status, MatchStatus::Won(Mark::SecondPlayer));
    assert_eq!(game.winner_name(), Some("bob"));
}

// =============================================================================
// History
// =============================================================================

/// History records the mover, the move and the discarded cube.
#[test]
fn test_history_records_discards() {
    let start = board([
        "     ",
        "     ",
        "     ",
        "     ",
        "O    ",
    ]);
    let mut game = Match::from_state(players(), start, MatchConfig::default()).unwrap();

    game.apply_move("ana", Coord::new(1, 1), Direction::Down).unwrap();

    let record = &game.history()[0];
    assert_eq!(record.mark, Mark::FirstPlayer);
    assert_eq!(record.mv.origin, Coord::new(1, 1));
    assert_eq!(record.discarded, Mark::SecondPlayer);
    assert_eq!(record.turn, 1);
}
