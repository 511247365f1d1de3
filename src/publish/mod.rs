//! Narrow seam to the external publish capability.

mod http;

pub use http::HttpPublisher;

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;

/// Acknowledgment that the transport accepted a message for delivery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, new)]
pub struct Ack {
    /// Transport-assigned message id, when the transport reports one.
    message_id: Option<String>,
}

/// Transport failure while publishing, with caller location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("publish error: {} at {}:{}", message, file, line)]
pub struct PublishError {
    /// Error message.
    pub message: String,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl PublishError {
    /// Creates a new publish error recording the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<reqwest::Error> for PublishError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        Self::new(format!("transport error: {}", err))
    }
}

impl From<serde_json::Error> for PublishError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("serialization error: {}", err))
    }
}

/// The single operation the core requires from a transport.
///
/// `publish` blocks (in the async sense) until the transport acknowledges the
/// message or fails; the caller does not proceed until it resolves. Retry
/// policy, if any, belongs to the implementation behind this seam.
#[async_trait::async_trait]
pub trait Publisher: Send + Sync {
    /// Publishes `payload` to `topic` and waits for acknowledgment.
    async fn publish(&self, topic: &str, payload: &[u8]) -> Result<Ack, PublishError>;
}
