//! Wire messages published to the command topic.

use crate::direction::Direction;
use crate::identity::PlayerIdentity;
use serde::{Deserialize, Serialize};

/// A game-control message.
///
/// Serializes to a tagged JSON object whose field names are fixed by the
/// consumer contract:
///
/// - join: `{"type": "join_game", "name": ..., "player_id": ...}`
/// - move: `{"type": "move", "player_id": ..., "direction": "UP" | ...}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameCommand {
    /// Announces a player joining the game. Always the first message of a
    /// session.
    #[serde(rename = "join_game")]
    JoinGame {
        /// Display name of the joining player.
        name: String,
        /// Unique player identifier.
        player_id: String,
    },
    /// A movement command for an already-joined player.
    #[serde(rename = "move")]
    Move {
        /// Unique player identifier.
        player_id: String,
        /// Chosen movement direction.
        direction: Direction,
    },
}

impl GameCommand {
    /// Builds the join message for `identity`.
    pub fn join(identity: &PlayerIdentity) -> Self {
        GameCommand::JoinGame {
            name: identity.name().clone(),
            player_id: identity.id().clone(),
        }
    }

    /// Builds a move message for `identity` in `direction`.
    pub fn move_to(identity: &PlayerIdentity, direction: Direction) -> Self {
        GameCommand::Move {
            player_id: identity.id().clone(),
            direction,
        }
    }
}
