//! Snake Pilot - game-command publisher
//!
//! Builds snake-game control messages (one join per session, then moves) and
//! publishes them to a pub/sub topic, enforcing the one client-side rule:
//! a move that reverses the previous accepted move is rejected.
//!
//! # Architecture
//!
//! - **Direction**: the four cardinal moves and the opposite-move validator
//! - **Emitter**: builds, serializes, and publishes commands, one at a time
//! - **Drivers**: keyboard-fed and autonomous random sources of moves
//! - **Session**: the loop tying a driver to the emitter
//!
//! # Example
//!
//! ```no_run
//! use snake_pilot::{
//!     CommandEmitter, ConsoleObserver, EmitterConfig, HttpPublisher, PlayerIdentity,
//! };
//!
//! # async fn example() -> anyhow::Result<()> {
//! let emitter = CommandEmitter::new(
//!     EmitterConfig::new("local-game".into(), "game-commands".into()),
//!     PlayerIdentity::generate("Player"),
//!     HttpPublisher::new("http://localhost:8085/v1"),
//!     Box::new(ConsoleObserver),
//! );
//! emitter.join().await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod direction;
mod drivers;
mod emitter;
mod identity;
mod message;
mod publish;
mod session;

// Crate-level exports - Direction validator
pub use direction::{Direction, is_valid_move, legal_directions};

// Crate-level exports - Drivers
pub use drivers::{Action, DirectionSource, KeyboardSource, RandomSource, choose_legal};

// Crate-level exports - Command emitter
pub use emitter::{
    CommandEmitter, ConsoleObserver, EmitEvent, EmitObserver, EmitterConfig, TracingObserver,
};

// Crate-level exports - Identity and messages
pub use identity::PlayerIdentity;
pub use message::GameCommand;

// Crate-level exports - Publish seam
pub use publish::{Ack, HttpPublisher, PublishError, Publisher};

// Crate-level exports - Session loop
pub use session::{SessionState, run_session};
