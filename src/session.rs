//! Session state and the driver loop.

use crate::direction::{Direction, is_valid_move};
use crate::drivers::{Action, DirectionSource};
use crate::emitter::CommandEmitter;
use crate::publish::Publisher;
use anyhow::{Context, Result};
use tracing::{info, instrument};

/// The one piece of mutable session state: the last accepted direction.
///
/// None at session start, overwritten after each accepted move, never reset.
/// Owned by the driver loop; nothing else touches it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    last_direction: Option<Direction>,
}

impl SessionState {
    /// Creates a fresh session state with no accepted moves.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last accepted direction, if any move has been accepted yet.
    pub fn last(&self) -> Option<Direction> {
        self.last_direction
    }

    /// Records an accepted move.
    pub fn record(&mut self, direction: Direction) {
        self.last_direction = Some(direction);
    }
}

/// Runs one command session: join first, then move per driver action until
/// the driver quits.
///
/// Each iteration asks `source` for an action. Moves that reverse the last
/// accepted direction are reported through the emitter's observer and
/// skipped; accepted moves are published (waiting for the ack) and recorded.
/// A publish failure aborts the session and propagates to the caller.
#[instrument(skip_all, fields(driver = source.name(), player = %emitter.identity().name()))]
pub async fn run_session<P: Publisher>(
    emitter: &CommandEmitter<P>,
    source: &mut dyn DirectionSource,
) -> Result<()> {
    emitter.join().await.context("failed to publish join")?;
    info!("joined game");

    let mut state = SessionState::new();

    loop {
        match source.next_action(state.last()).await? {
            Action::Quit => {
                info!("session terminated");
                return Ok(());
            }
            Action::Move(candidate) => {
                if !is_valid_move(candidate, state.last()) {
                    // Only reachable when a move has already been accepted.
                    if let Some(last) = state.last() {
                        emitter.report_rejection(candidate, last);
                    }
                    continue;
                }

                emitter
                    .send_move(candidate)
                    .await
                    .context("failed to publish move")?;
                state.record(candidate);
            }
        }
    }
}
