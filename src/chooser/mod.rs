//! Pluggable move choosers.
//!
//! A driver asks a `MoveChooser` for the next move of an automated player.
//! Choosers only ever propose legal moves; the match still validates the
//! move when it is applied. No search or evaluation heuristics live here.

use tracing::debug;

use crate::core::{GameRng, Mark, Move};
use crate::error::{BoardError, MoveError};
use crate::game::{Match, MatchStatus};
use crate::rules;

/// Strategy for picking a move for one side of a match.
pub trait MoveChooser: Send + Sync {
    /// Choose a legal move for `mark`.
    ///
    /// Returns `None` if the match is over or `mark` has no legal move.
    fn choose_move(&self, game: &Match, mark: Mark, rng: &mut GameRng) -> Option<Move>;
}

/// Picks uniformly among the legal moves.
#[derive(Clone, Debug, Default)]
pub struct UniformChooser;

impl MoveChooser for UniformChooser {
    fn choose_move(&self, game: &Match, mark: Mark, rng: &mut GameRng) -> Option<Move> {
        if game.status().is_terminal() {
            return None;
        }
        let moves = rules::legal_moves(game.board(), mark);
        rng.choose(&moves).copied()
    }
}

/// Always picks the first legal move in board scan order.
#[derive(Clone, Debug, Default)]
pub struct FirstLegalChooser;

impl MoveChooser for FirstLegalChooser {
    fn choose_move(&self, game: &Match, mark: Mark, _rng: &mut GameRng) -> Option<Move> {
        if game.status().is_terminal() {
            return None;
        }
        rules::legal_moves(game.board(), mark).first().copied()
    }
}

/// Let `chooser` play one move for the player to move.
///
/// Returns `Ok(None)` when the chooser has no move to offer.
pub fn play_turn<C: MoveChooser + ?Sized>(
    game: &mut Match,
    chooser: &C,
    rng: &mut GameRng,
) -> Result<Option<MatchStatus>, MoveError> {
    if let MatchStatus::Won(winner) = game.status() {
        return Err(MoveError::MatchAlreadyWon { winner });
    }

    let mark = game.to_move();
    let player = game
        .players()
        .name_of(mark)
        .ok_or_else(|| BoardError::InvalidMark(mark.symbol().to_string()))?
        .to_string();

    let Some(mv) = chooser.choose_move(game, mark, rng) else {
        debug!(%player, "chooser has no move");
        return Ok(None);
    };

    debug!(%player, %mv, "chooser picked move");
    game.play(&player, mv).map(Some)
}
