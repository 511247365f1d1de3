//! Builds game commands and hands them to the publish seam.

use crate::direction::Direction;
use crate::identity::PlayerIdentity;
use crate::message::GameCommand;
use crate::publish::{Ack, PublishError, Publisher};
use derive_getters::Getters;
use derive_new::new;
use tracing::{info, warn};

/// Topic addressing for the emitter, passed in at construction rather than
/// read from globals.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct EmitterConfig {
    /// Cloud project the topic lives in.
    project: String,
    /// Short topic name.
    topic: String,
}

impl EmitterConfig {
    /// Returns the fully qualified topic path.
    pub fn topic_path(&self) -> String {
        format!("projects/{}/topics/{}", self.project, self.topic)
    }
}

/// Something the emitter reports about a session.
#[derive(Debug, Clone)]
pub enum EmitEvent {
    /// A command was serialized, published, and acknowledged.
    Published {
        /// The command that went out.
        command: GameCommand,
        /// Transport-assigned id, when reported.
        message_id: Option<String>,
    },
    /// A candidate move was refused by the opposite-direction rule. Nothing
    /// was sent.
    Rejected {
        /// The refused direction.
        candidate: Direction,
        /// The last accepted direction it would have reversed.
        last: Direction,
    },
    /// A publish attempt failed.
    Failed {
        /// The command that did not go out.
        command: GameCommand,
        /// Transport error description.
        error: String,
    },
}

/// Receives emitter events, decoupling the session from standard output.
pub trait EmitObserver: Send + Sync {
    /// Called once per emitter event.
    fn on_event(&self, event: EmitEvent);
}

/// Observer that reports through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl EmitObserver for TracingObserver {
    fn on_event(&self, event: EmitEvent) {
        match event {
            EmitEvent::Published {
                command,
                message_id,
            } => {
                info!(?command, ?message_id, "published");
            }
            EmitEvent::Rejected { candidate, last } => {
                info!(%candidate, %last, "move rejected");
            }
            EmitEvent::Failed { command, error } => {
                warn!(?command, error = %error, "publish failed");
            }
        }
    }
}

/// Observer that prints to the terminal for interactive sessions, keeping
/// rejection notices visible without a log subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleObserver;

impl EmitObserver for ConsoleObserver {
    fn on_event(&self, event: EmitEvent) {
        match event {
            EmitEvent::Published { command, .. } => match serde_json::to_string(&command) {
                Ok(json) => println!("Published: {}", json),
                Err(_) => println!("Published: {:?}", command),
            },
            EmitEvent::Rejected { candidate, last } => {
                println!("Invalid move: cannot go {} after {}", candidate, last);
            }
            EmitEvent::Failed { command, error } => {
                println!("Publish failed for {:?}: {}", command, error);
            }
        }
    }
}

/// Constructs join and move messages and publishes them, one at a time.
///
/// `emit` waits for the transport acknowledgment before returning, so a
/// driver loop never has more than one message in flight.
pub struct CommandEmitter<P: Publisher> {
    config: EmitterConfig,
    identity: PlayerIdentity,
    publisher: P,
    observer: Box<dyn EmitObserver>,
}

impl<P: Publisher> CommandEmitter<P> {
    /// Creates an emitter for `identity` publishing through `publisher`.
    pub fn new(
        config: EmitterConfig,
        identity: PlayerIdentity,
        publisher: P,
        observer: Box<dyn EmitObserver>,
    ) -> Self {
        Self {
            config,
            identity,
            publisher,
            observer,
        }
    }

    /// The identity this emitter publishes for.
    pub fn identity(&self) -> &PlayerIdentity {
        &self.identity
    }

    /// The topic configuration in use.
    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Publishes the session's join message.
    pub async fn join(&self) -> Result<Ack, PublishError> {
        self.emit(&GameCommand::join(&self.identity)).await
    }

    /// Publishes a move in `direction`.
    pub async fn send_move(&self, direction: Direction) -> Result<Ack, PublishError> {
        self.emit(&GameCommand::move_to(&self.identity, direction))
            .await
    }

    /// Reports a move refused by the opposite-direction rule. Nothing is
    /// published.
    pub fn report_rejection(&self, candidate: Direction, last: Direction) {
        self.observer
            .on_event(EmitEvent::Rejected { candidate, last });
    }

    async fn emit(&self, command: &GameCommand) -> Result<Ack, PublishError> {
        let payload = serde_json::to_vec(command)?;
        let topic = self.config.topic_path();

        match self.publisher.publish(&topic, &payload).await {
            Ok(ack) => {
                self.observer.on_event(EmitEvent::Published {
                    command: command.clone(),
                    message_id: ack.message_id().clone(),
                });
                Ok(ack)
            }
            Err(err) => {
                self.observer.on_event(EmitEvent::Failed {
                    command: command.clone(),
                    error: err.to_string(),
                });
                Err(err)
            }
        }
    }
}
