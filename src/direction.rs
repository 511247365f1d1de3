//! Movement directions and the opposite-move rule.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// One of the four cardinal movement directions.
///
/// Serializes to the uppercase wire spelling ("UP", "DOWN", "LEFT", "RIGHT")
/// expected by the game-command consumer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Direction {
    /// Move up.
    Up,
    /// Move down.
    Down,
    /// Move left.
    Left,
    /// Move right.
    Right,
}

impl Direction {
    /// Returns the direction that reverses this one.
    ///
    /// `opposite` is an involution: `d.opposite().opposite() == d`.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Checks whether `candidate` may follow the last accepted direction.
///
/// The first move of a session is always legal. After that, only the exact
/// opposite of the last accepted move is forbidden; repeating the same
/// direction is fine.
pub fn is_valid_move(candidate: Direction, last: Option<Direction>) -> bool {
    match last {
        Some(last) => candidate != last.opposite(),
        None => true,
    }
}

/// Returns every direction that may legally follow `last`.
///
/// Four directions when `last` is `None`, otherwise the three that are not
/// `last`'s opposite. Never empty, so callers may index into it freely.
pub fn legal_directions(last: Option<Direction>) -> Vec<Direction> {
    Direction::iter()
        .filter(|candidate| is_valid_move(*candidate, last))
        .collect()
}
