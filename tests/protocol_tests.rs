//! Remote-service payload tests.
//!
//! These tests load server replies into matches and build move requests
//! from chooser output.

use quixo_engine::chooser::{FirstLegalChooser, MoveChooser};
use quixo_engine::core::{GameRng, Mark, MatchConfig, Vocabulary};
use quixo_engine::error::{ProtocolError, SetupError};
use quixo_engine::game::MatchStatus;
use quixo_engine::protocol::{GameResponse, MatchPayload, MoveRequest};

const REPLY: &str = r#"{
    "id": "6f1c",
    "état": {
        "joueurs": ["ana", "robot"],
        "plateau": [
            ["X", "X", "X", "X", "X"],
            [" ", "O", " ", " ", " "],
            [" ", " ", "O", " ", " "],
            [" ", " ", " ", "O", " "],
            [" ", " ", " ", " ", " "]
        ]
    },
    "gagnant": "ana"
}"#;

/// A finished game from the server loads as a won match.
#[test]
fn test_load_finished_game() {
    let response = GameResponse::from_json(REPLY).unwrap();
    assert_eq!(response.winner.as_deref(), Some("ana"));

    let game = response.into_match(MatchConfig::default()).unwrap();
    assert_eq!(game.status(), MatchStatus::Won(Mark::FirstPlayer));
    assert_eq!(game.winner_name(), Some("ana"));
    assert!(game.legal_moves().is_empty());
}

/// A reported winner the board does not back up is refused.
#[test]
fn test_reported_winner_without_line() {
    let json = REPLY.replace(r#""X", "X", "X", "X", "X""#, r#""X", "X", " ", "X", "X""#);
    let response = GameResponse::from_json(&json).unwrap();

    assert!(matches!(
        response.into_match(MatchConfig::default()),
        Err(ProtocolError::WinnerMismatch { detected: None, .. })
    ));
}

/// A reply with a bad player list is a setup error.
#[test]
fn test_bad_player_list() {
    let json = REPLY.replace(r#"["ana", "robot"]"#, r#"["ana", "ana"]"#);
    let response = GameResponse::from_json(&json).unwrap();

    assert!(matches!(
        response.into_match(MatchConfig::default()),
        Err(ProtocolError::Setup(SetupError::DuplicatePlayer(_)))
    ));
}

/// The payload of a reloaded match serializes back to the same shape.
#[test]
fn test_reply_round_trip() {
    let response = GameResponse::from_json(REPLY).unwrap();
    let game = response.clone().into_match(MatchConfig::default()).unwrap();

    assert_eq!(MatchPayload::from_match(&game), response.state);
    let again = GameResponse::from_json(&response.to_json().unwrap()).unwrap();
    assert_eq!(again, response);
}

/// A chooser's move goes out in the configured vocabulary.
#[test]
fn test_move_request_from_chooser() {
    let json = REPLY
        .replace(r#""X", "X", "X", "X", "X""#, r#"" ", "X", "X", "X", "X""#)
        .replace(r#""gagnant": "ana""#, r#""gagnant": null"#);
    let game = GameResponse::from_json(&json)
        .unwrap()
        .into_match(MatchConfig::default())
        .unwrap();
    assert_eq!(game.status(), MatchStatus::InProgress);

    let mut rng = GameRng::new(0);
    let mv = FirstLegalChooser
        .choose_move(&game, game.to_move(), &mut rng)
        .unwrap();

    let request = MoveRequest::for_match(&game, mv);
    assert_eq!(request.origin, [1, 1]);
    assert_eq!(request.direction, "haut");
    assert_eq!(request.parse_move(), Ok(mv));

    let english = MoveRequest::new(mv, Vocabulary::English);
    assert_eq!(
        english.to_json().unwrap(),
        r#"{"origine":[1,1],"direction":"up"}"#
    );
}
