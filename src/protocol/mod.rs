//! JSON shapes exchanged with a remote game server.
//!
//! The server speaks French field names (`joueurs`, `plateau`, `état`,
//! `gagnant`, `origine`); English aliases are accepted on input. These are
//! plain serde types with conversions to and from the engine's own types.
//! No transport lives here.
//!
//! ## Example
//!
//! ```
//! use quixo_engine::core::MatchConfig;
//! use quixo_engine::protocol::GameResponse;
//!
//! let json = r#"{
//!     "id": "c0ffee",
//!     "état": {
//!         "joueurs": ["alice", "robot"],
//!         "plateau": [
//!             [" ", " ", " ", " ", " "],
//!             [" ", "X", " ", " ", " "],
//!             [" ", " ", " ", " ", " "],
//!             [" ", " ", " ", "O", " "],
//!             [" ", " ", " ", " ", " "]
//!         ]
//!     },
//!     "gagnant": null
//! }"#;
//!
//! let response = GameResponse::from_json(json).unwrap();
//! let game = response.into_match(MatchConfig::default()).unwrap();
//! assert_eq!(game.players().second(), "robot");
//! ```

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Coord, Direction, MatchConfig, Move, Players, Vocabulary};
use crate::error::{BoardError, ProtocolError, SetupError};
use crate::game::Match;

/// Players and board as the server describes a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPayload {
    #[serde(rename = "joueurs", alias = "players")]
    pub players: Vec<String>,
    #[serde(rename = "plateau", alias = "board")]
    pub board: Vec<Vec<String>>,
}

impl MatchPayload {
    /// Describe `game` in wire form.
    #[must_use]
    pub fn from_match(game: &Match) -> Self {
        Self {
            players: game.players().names().to_vec(),
            board: game.board().to_symbols(),
        }
    }

    /// Rebuild a match from this payload.
    pub fn into_match(self, config: MatchConfig) -> Result<Match, SetupError> {
        let players = Players::from_list(&self.players)?;
        let board = Board::from_symbols(&self.board)?;
        Match::from_state(players, board, config)
    }
}

/// Server reply carrying a match id, its state and the winner's name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResponse {
    pub id: String,
    #[serde(rename = "état", alias = "state")]
    pub state: MatchPayload,
    #[serde(rename = "gagnant", alias = "winner", default)]
    pub winner: Option<String>,
}

impl GameResponse {
    /// Parse a server reply.
    pub fn from_json(json: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize with the server's field names.
    pub fn to_json(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Rebuild the described match.
    ///
    /// The winner is re-evaluated from the board and must agree with the
    /// server's `gagnant`, otherwise `WinnerMismatch` is returned.
    pub fn into_match(self, config: MatchConfig) -> Result<Match, ProtocolError> {
        let game = self.state.into_match(config)?;
        let detected = game.winner_name();
        if detected != self.winner.as_deref() {
            return Err(ProtocolError::WinnerMismatch {
                reported: self.winner,
                detected: detected.map(str::to_string),
            });
        }
        Ok(game)
    }
}

/// A move as sent to the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    #[serde(rename = "origine", alias = "origin")]
    pub origin: [usize; 2],
    pub direction: String,
}

impl MoveRequest {
    /// Describe `mv` using the keywords of `vocabulary`.
    #[must_use]
    pub fn new(mv: Move, vocabulary: Vocabulary) -> Self {
        Self {
            origin: [mv.origin.x, mv.origin.y],
            direction: mv.direction.keyword(vocabulary).to_string(),
        }
    }

    /// Describe `mv` using the vocabulary configured for `game`.
    #[must_use]
    pub fn for_match(game: &Match, mv: Move) -> Self {
        Self::new(mv, game.config().vocabulary)
    }

    /// Parse back into a `Move`. Range is not checked here.
    pub fn parse_move(&self) -> Result<Move, BoardError> {
        let direction: Direction = self.direction.parse()?;
        let [x, y] = self.origin;
        Ok(Move::new(Coord::new(x, y), direction))
    }

    /// Parse a move request.
    pub fn from_json(json: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize with the server's field names.
    pub fn to_json(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }
}
