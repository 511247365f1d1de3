//! Tests for the wire shape of game commands.

use serde_json::json;
use snake_pilot::{Direction, GameCommand, PlayerIdentity};

#[test]
fn test_join_wire_shape() {
    let identity = PlayerIdentity::new("p1", "Ada");
    let command = GameCommand::join(&identity);

    let value = serde_json::to_value(&command).unwrap();
    assert_eq!(
        value,
        json!({
            "type": "join_game",
            "name": "Ada",
            "player_id": "p1",
        })
    );
}

#[test]
fn test_move_wire_shape() {
    let identity = PlayerIdentity::new("p1", "Ada");
    let command = GameCommand::move_to(&identity, Direction::Left);

    let value = serde_json::to_value(&command).unwrap();
    assert_eq!(
        value,
        json!({
            "type": "move",
            "player_id": "p1",
            "direction": "LEFT",
        })
    );
}

#[test]
fn test_direction_wire_spellings_are_uppercase() {
    let spellings: Vec<serde_json::Value> = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ]
    .iter()
    .map(|d| serde_json::to_value(d).unwrap())
    .collect();

    assert_eq!(spellings, vec![json!("UP"), json!("DOWN"), json!("LEFT"), json!("RIGHT")]);
}

#[test]
fn test_identity_fields_are_distinct_concepts() {
    let a = PlayerIdentity::generate("SameName");
    let b = PlayerIdentity::generate("SameName");

    assert_eq!(a.name(), b.name());
    assert_ne!(a.id(), b.id(), "generated ids must be unique");
}

#[test]
fn test_commands_parse_back() {
    let raw = r#"{"type":"move","player_id":"p1","direction":"UP"}"#;
    let command: GameCommand = serde_json::from_str(raw).unwrap();
    assert_eq!(
        command,
        GameCommand::move_to(&PlayerIdentity::new("p1", "ignored"), Direction::Up)
    );
}
