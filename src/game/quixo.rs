//! A Quixo match: two players, one board, one optional winner.
//!
//! `Match` owns its `Board` exclusively. Observers get copies through
//! `snapshot()`; the only mutation path is `apply_move`, which validates
//! the whole move before touching the board and re-evaluates the winner
//! afterwards.
//!
//! ## States
//!
//! `InProgress -> InProgress` when a move completes no line, and
//! `InProgress -> Won(mark)` when it does. Nothing leaves `Won`.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::board::{Board, Grid};
use crate::core::{Coord, Direction, MatchConfig, Mark, Move, MoveRecord, Players};
use crate::error::{BoardError, MoveError, SetupError};
use crate::rules::{self, LegalMoves};

/// Match progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    /// Moves are accepted.
    InProgress,
    /// Terminal: the mark that completed a winning line.
    Won(Mark),
}

impl MatchStatus {
    /// True once a winner is recorded.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, MatchStatus::Won(_))
    }
}

/// Copy of a match's observable state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub players: Players,
    pub board: Grid,
    pub winner: Option<Mark>,
}

/// One Quixo match.
#[derive(Clone, Debug)]
pub struct Match {
    players: Players,
    board: Board,
    config: MatchConfig,
    to_move: Mark,
    status: MatchStatus,
    history: Vec<MoveRecord>,
}

impl Match {
    /// Start a match on an empty board with the default configuration.
    #[must_use]
    pub fn new(players: Players) -> Self {
        let config = MatchConfig::default();
        Self {
            players,
            board: Board::new(),
            to_move: config.first_to_move,
            config,
            status: MatchStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Start a match on an empty board.
    pub fn with_config(players: Players, config: MatchConfig) -> Result<Self, SetupError> {
        Self::from_state(players, Board::new(), config)
    }

    /// Rebuild a match from externally held state.
    ///
    /// The winner is evaluated immediately, so a terminal board gives a
    /// terminal match. With no move history, the player who moved last is
    /// taken to be the opponent of `config.first_to_move`.
    pub fn from_state(
        players: Players,
        board: Board,
        config: MatchConfig,
    ) -> Result<Self, SetupError> {
        config
            .validate()
            .map_err(|e| SetupError::Config(e.to_string()))?;

        let mut game = Self {
            players,
            board,
            to_move: config.first_to_move,
            config,
            status: MatchStatus::InProgress,
            history: Vec::new(),
        };
        if let Some(winner) = game.detect_winner() {
            game.status = MatchStatus::Won(winner);
        }
        Ok(game)
    }

    /// The player pairing.
    #[must_use]
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// Read-only view of the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The configuration this match runs with.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Mark expected to move next.
    #[must_use]
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Name of the player expected to move next.
    #[must_use]
    pub fn player_to_move(&self) -> Option<&str> {
        self.players.name_of(self.to_move)
    }

    /// Resync the turn with an authoritative source.
    pub fn set_to_move(&mut self, mark: Mark) -> Result<(), BoardError> {
        if !mark.is_player() {
            return Err(BoardError::InvalidMark(mark.symbol().to_string()));
        }
        self.to_move = mark;
        Ok(())
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Recorded winner, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            MatchStatus::Won(mark) => Some(mark),
            MatchStatus::InProgress => None,
        }
    }

    /// Name of the recorded winner, if any.
    #[must_use]
    pub fn winner_name(&self) -> Option<&str> {
        self.winner().and_then(|mark| self.players.name_of(mark))
    }

    /// Moves applied through this match, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Copy of the players, grid and winner.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            players: self.players.clone(),
            board: self.board.snapshot(),
            winner: self.winner(),
        }
    }

    /// Legal moves for the player to move. Empty once the match is won.
    #[must_use]
    pub fn legal_moves(&self) -> LegalMoves {
        if self.status.is_terminal() {
            return LegalMoves::new();
        }
        rules::legal_moves(&self.board, self.to_move)
    }

    /// Scan the board for a winning line.
    ///
    /// Once a winner is recorded it is returned unchanged. Otherwise the
    /// lines are scanned with the configured tie-break, favouring the
    /// player who moved last.
    #[must_use]
    pub fn detect_winner(&self) -> Option<Mark> {
        if let MatchStatus::Won(mark) = self.status {
            return Some(mark);
        }
        rules::detect_winner(&self.board, self.last_mover(), self.config.tie_break)
    }

    /// Check a move for `player` without applying it.
    ///
    /// Returns the mark the player would insert. Checks run in this order:
    /// match already won, unknown player, wrong turn, origin outside the
    /// board, origin owned by the opponent, segment leaving the board.
    pub fn validate_move(
        &self,
        player: &str,
        origin: Coord,
        direction: Direction,
    ) -> Result<Mark, MoveError> {
        if let MatchStatus::Won(winner) = self.status {
            return Err(MoveError::MatchAlreadyWon { winner });
        }

        let mark = self
            .players
            .mark_of(player)
            .ok_or_else(|| MoveError::UnknownPlayer(player.to_string()))?;

        if self.config.enforce_turn_order && mark != self.to_move {
            return Err(MoveError::NotPlayersTurn {
                player: player.to_string(),
            });
        }

        rules::check_move(&self.board, mark, Move::new(origin, direction))?;
        Ok(mark)
    }

    /// Validate and apply a move, then re-evaluate the winner.
    ///
    /// A rejected move leaves the match unchanged.
    #[instrument(skip(self), fields(turn = self.history.len() + 1))]
    pub fn apply_move(
        &mut self,
        player: &str,
        origin: Coord,
        direction: Direction,
    ) -> Result<MatchStatus, MoveError> {
        let mark = self.validate_move(player, origin, direction).map_err(|e| {
            debug!(error = %e, "move rejected");
            e
        })?;

        let discarded = self.board.insert(mark, origin, direction)?;
        let turn = u32::try_from(self.history.len() + 1).unwrap_or(u32::MAX);
        self.history.push(MoveRecord::new(
            mark,
            Move::new(origin, direction),
            turn,
            discarded,
        ));

        if let Some(next) = mark.opponent() {
            self.to_move = next;
        }

        if let Some(winner) = rules::detect_winner(&self.board, mark, self.config.tie_break) {
            self.status = MatchStatus::Won(winner);
            info!(
                winner = %winner,
                name = self.players.name_of(winner).unwrap_or_default(),
                turn,
                "match won"
            );
        }
        Ok(self.status)
    }

    /// `apply_move` taking a `Move` value.
    pub fn play(&mut self, player: &str, mv: Move) -> Result<MatchStatus, MoveError> {
        self.apply_move(player, mv.origin, mv.direction)
    }

    fn last_mover(&self) -> Mark {
        match self.history.last() {
            Some(record) => record.mark,
            None => self.to_move.opponent().unwrap_or(Mark::Empty),
        }
    }
}
