//! Autonomous driver that picks random legal moves on a fixed interval.

use super::{Action, DirectionSource};
use crate::direction::{Direction, legal_directions};
use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior};
use tracing::debug;

/// Picks uniformly among the directions that may legally follow `last`.
///
/// The choice set is never empty, so every pick is valid by construction and
/// the session validator's negative branch is unreachable in autonomous runs.
pub fn choose_legal<R: Rng>(rng: &mut R, last: Option<Direction>) -> Direction {
    let options = legal_directions(last);
    options[rng.random_range(0..options.len())]
}

/// Emits one random legal move per interval tick.
///
/// The interval is a real [`tokio::time::Interval`], so the tick period does
/// not drift by however long each publish takes. The RNG is injected rather
/// than taken from a global source, so seeded runs are reproducible.
pub struct RandomSource {
    interval: Interval,
    rng: StdRng,
}

impl RandomSource {
    /// Creates a source ticking every `period`, seeded from the OS.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(period: Duration) -> Self {
        Self::with_rng(period, StdRng::from_os_rng())
    }

    /// Creates a source ticking every `period` with a fixed seed.
    pub fn with_seed(period: Duration, seed: u64) -> Self {
        Self::with_rng(period, StdRng::seed_from_u64(seed))
    }

    fn with_rng(period: Duration, rng: StdRng) -> Self {
        // First tick after one full period, matching the sleep-then-move
        // cadence of the session start.
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval, rng }
    }
}

#[async_trait::async_trait]
impl DirectionSource for RandomSource {
    async fn next_action(&mut self, last: Option<Direction>) -> Result<Action> {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => Ok(Action::Quit),
            _ = self.interval.tick() => {
                let direction = choose_legal(&mut self.rng, last);
                debug!(%direction, ?last, "tick");
                Ok(Action::Move(direction))
            }
        }
    }

    fn name(&self) -> &str {
        "auto"
    }
}
