//! Player pairing.
//!
//! A match is played by exactly two players identified by name. The first
//! name plays `Mark::FirstPlayer` ("X"), the second `Mark::SecondPlayer`
//! ("O"). The pairing is read-only once built.

use serde::{Deserialize, Serialize};

use super::mark::Mark;
use crate::error::SetupError;

/// Ordered pair of two distinct player identifiers.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Players {
    names: [String; 2],
}

impl Players {
    /// Pair two players. The first one plays "X".
    ///
    /// ```
    /// use quixo_engine::core::{Mark, Players};
    ///
    /// let players = Players::new("alice", "robot").unwrap();
    /// assert_eq!(players.mark_of("robot"), Some(Mark::SecondPlayer));
    /// assert!(Players::new("alice", "alice").is_err());
    /// ```
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Result<Self, SetupError> {
        let first = first.into();
        let second = second.into();

        if first.is_empty() || second.is_empty() {
            return Err(SetupError::EmptyPlayerName);
        }
        if first == second {
            return Err(SetupError::DuplicatePlayer(first));
        }

        Ok(Self {
            names: [first, second],
        })
    }

    /// Build from the player list of a remote-service payload.
    pub fn from_list(names: &[String]) -> Result<Self, SetupError> {
        match names {
            [first, second] => Self::new(first.clone(), second.clone()),
            _ => Err(SetupError::WrongPlayerCount(names.len())),
        }
    }

    /// Mark played by `name`, if that player is in the pairing.
    #[must_use]
    pub fn mark_of(&self, name: &str) -> Option<Mark> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|seat| Mark::PLAYERS[seat])
    }

    /// Name of the player holding `mark`. `None` for `Mark::Empty`.
    #[must_use]
    pub fn name_of(&self, mark: Mark) -> Option<&str> {
        mark.seat().map(|seat| self.names[seat].as_str())
    }

    /// Name of the "X" player.
    #[must_use]
    pub fn first(&self) -> &str {
        &self.names[0]
    }

    /// Name of the "O" player.
    #[must_use]
    pub fn second(&self) -> &str {
        &self.names[1]
    }

    /// Both names in seating order.
    #[must_use]
    pub fn names(&self) -> &[String; 2] {
        &self.names
    }
}

impl TryFrom<Vec<String>> for Players {
    type Error = SetupError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_list(&names)
    }
}

impl From<Players> for Vec<String> {
    fn from(players: Players) -> Self {
        players.names.into()
    }
}

impl std::fmt::Display for Players {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (X) vs {} (O)", self.names[0], self.names[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_follow_seating_order() {
        let players = Players::new("ana", "bob").unwrap();

        assert_eq!(players.mark_of("ana"), Some(Mark::FirstPlayer));
        assert_eq!(players.mark_of("bob"), Some(Mark::SecondPlayer));
        assert_eq!(players.mark_of("eve"), None);
    }

    #[test]
    fn test_name_of() {
        let players = Players::new("ana", "bob").unwrap();

        assert_eq!(players.name_of(Mark::FirstPlayer), Some("ana"));
        assert_eq!(players.name_of(Mark::SecondPlayer), Some("bob"));
        assert_eq!(players.name_of(Mark::Empty), None);
    }

    #[test]
    fn test_rejects_duplicates_and_blanks() {
        assert_eq!(
            Players::new("ana", "ana"),
            Err(SetupError::DuplicatePlayer("ana".to_string()))
        );
        assert_eq!(Players::new("", "bob"), Err(SetupError::EmptyPlayerName));
    }

    #[test]
    fn test_from_list_counts_players() {
        let three = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(Players::from_list(&three), Err(SetupError::WrongPlayerCount(3)));
        assert_eq!(Players::from_list(&[]), Err(SetupError::WrongPlayerCount(0)));
    }

    #[test]
    fn test_serialization_as_list() {
        let players = Players::new("ana", "bob").unwrap();
        let json = serde_json::to_string(&players).unwrap();
        assert_eq!(json, r#"["ana","bob"]"#);

        let back: Players = serde_json::from_str(&json).unwrap();
        assert_eq!(back, players);

        assert!(serde_json::from_str::<Players>(r#"["solo"]"#).is_err());
    }
}
