//! Persisted JSON format: round trips and documents written by other clients.

use serde_json::json;
use ultimate_tictactoe::{
    ActiveCorner, Cell, Engine, Game, GameState, Move, Player, Position,
};

fn empty_board() -> serde_json::Value {
    let mut board = json!({ "finished": false, "winner": "" });
    for pos in Position::ALL {
        board[pos.wire_name()] = json!("");
    }
    board
}

fn empty_state() -> serde_json::Value {
    let mut state = json!({
        "turn": "X",
        "finished": false,
        "winner": "",
        "activeCorner": "",
    });
    for pos in Position::ALL {
        state[pos.wire_name()] = empty_board();
    }
    state
}

fn sample_game() -> Game {
    let moves = [
        Move::new(Player::X, Position::Center, Position::TopLeft),
        Move::new(Player::O, Position::TopLeft, Position::Center),
        Move::new(Player::X, Position::Center, Position::BottomRight),
        Move::new(Player::O, Position::BottomRight, Position::Center),
    ];
    let mut game = Game::new();
    for (idx, mov) in moves.into_iter().enumerate() {
        Engine::take_turn_at(&mut game, mov, 1_700_000_000 + idx as i64 * 20).unwrap();
    }
    game
}

#[test]
fn test_round_trip_preserves_game_and_timestamps() {
    let game = sample_game();
    let json = game.to_json_pretty().unwrap();
    let back = Game::from_json(&json).unwrap();

    assert_eq!(back, game);
    let stamps: Vec<i64> = back
        .history()
        .iter()
        .map(|snapshot| snapshot.next_turn_timestamp())
        .collect();
    assert_eq!(
        stamps,
        vec![1_700_000_000, 1_700_000_020, 1_700_000_040, 1_700_000_060]
    );
}

#[test]
fn test_pretty_json_uses_two_space_indent() {
    let json = Game::new().to_json_pretty().unwrap();
    assert!(json.starts_with("{\n  \"current_game\": {"));
}

#[test]
fn test_decodes_document_from_other_client() {
    // Written by a client that stamps the current state as well.
    let mut current = empty_state();
    current["turn"] = json!("O");
    current["activeCorner"] = json!("topleft");
    current["center"]["topleft"] = json!("X");
    current["next_turn_timestamp"] = json!(1_700_000_100);

    let mut before = empty_state();
    before["next_turn_timestamp"] = json!(1_700_000_100);

    let document = json!({
        "current_game": current,
        "history": [before],
    });

    let game: Game = serde_json::from_value(document).unwrap();
    assert_eq!(game.current().turn(), Player::O);
    assert_eq!(
        game.current().active_corner(),
        ActiveCorner::Constrained(Position::TopLeft)
    );
    assert_eq!(
        game.current().board(Position::Center).cell(Position::TopLeft),
        Cell::Occupied(Player::X)
    );
    assert_eq!(game.history().len(), 1);
    assert!(game.validate().is_ok());
}

#[test]
fn test_stored_status_is_trusted_on_decode() {
    // A row of X marks with a stale status field loads as stored.
    let mut value = empty_state();
    for pos in [Position::TopLeft, Position::TopMiddle, Position::TopRight] {
        value["bottomleft"][pos.wire_name()] = json!("X");
    }
    let state: GameState = serde_json::from_value(value).unwrap();
    assert!(!state.board(Position::BottomLeft).is_finished());
}

#[test]
fn test_unknown_symbol_is_rejected() {
    let mut value = empty_state();
    value["center"]["center"] = json!("Z");
    let result: Result<GameState, _> = serde_json::from_value(value);
    assert!(result.is_err());
}

#[test]
fn test_unknown_active_corner_is_rejected() {
    let mut value = empty_state();
    value["activeCorner"] = json!("middle");
    let result: Result<GameState, _> = serde_json::from_value(value);
    assert!(result.is_err());
}

#[test]
fn test_move_accepts_position_alias_and_hyphenated_names() {
    let mov: Move = serde_json::from_value(json!({
        "player": "O",
        "corner": "top-left",
        "position": "bottomright",
    }))
    .unwrap();
    assert_eq!(
        mov,
        Move::new(Player::O, Position::TopLeft, Position::BottomRight)
    );

    let value = serde_json::to_value(mov).unwrap();
    assert_eq!(value["corner"], "topleft");
    assert_eq!(value["cell"], "bottomright");
}

#[test]
fn test_tampered_history_fails_validation() {
    let game = sample_game();
    let mut value: serde_json::Value = serde_json::from_str(&game.to_json_pretty().unwrap()).unwrap();
    value["history"].as_array_mut().unwrap().remove(1);

    let tampered: Game = serde_json::from_value(value).unwrap();
    let violations = tampered.validate().unwrap_err();
    assert!(!violations.is_empty());
}
