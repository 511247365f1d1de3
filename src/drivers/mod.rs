//! Sources of candidate moves: keyboard-driven and autonomous.

mod auto;
mod keyboard;

pub use auto::{RandomSource, choose_legal};
pub use keyboard::KeyboardSource;

use crate::direction::Direction;
use anyhow::Result;

/// What a driver wants the session to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Attempt a move in the given direction.
    Move(Direction),
    /// End the session. No further messages are sent.
    Quit,
}

/// Produces the next candidate action for the session loop.
///
/// `last` is the last accepted direction, so autonomous sources can restrict
/// themselves to legal moves up front. Keyboard sources are free to ignore it
/// and let the session's validator reject reversals.
#[async_trait::async_trait]
pub trait DirectionSource: Send {
    /// Waits for and returns the next action.
    async fn next_action(&mut self, last: Option<Direction>) -> Result<Action>;

    /// Short label for logging.
    fn name(&self) -> &str;
}
