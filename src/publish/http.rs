//! HTTP implementation of the publish seam.

use super::{Ack, PublishError, Publisher};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

/// Publishes to a pub/sub-style REST endpoint.
///
/// Each message is POSTed to `{base_url}/{topic}:publish` wrapped in the
/// pub/sub publish envelope, the payload base64-encoded in
/// `messages[0].data`; any non-success status is a [`PublishError`].
#[derive(Debug, Clone)]
pub struct HttpPublisher {
    base_url: String,
    client: reqwest::Client,
}

/// Publish response body; the message id is optional because not every
/// endpoint returns one.
#[derive(Debug, Default, Deserialize)]
struct PublishResponse {
    #[serde(rename = "messageIds", default)]
    message_ids: Vec<String>,
}

/// Builds the publish request envelope for one message.
fn publish_body(payload: &[u8]) -> Value {
    json!({
        "messages": [
            { "data": STANDARD.encode(payload) }
        ]
    })
}

impl HttpPublisher {
    /// Creates a publisher targeting `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl Publisher for HttpPublisher {
    async fn publish(&self, topic: &str, payload: &[u8]) -> Result<Ack, PublishError> {
        let url = format!("{}/{}:publish", self.base_url, topic);
        debug!(url = %url, bytes = payload.len(), "publishing message");

        let response = self
            .client
            .post(&url)
            .json(&publish_body(payload))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PublishError::new(format!(
                "topic {} rejected message with status {}",
                topic, status
            )));
        }

        let body = match response.json::<PublishResponse>().await {
            Ok(body) => body,
            Err(err) => {
                debug!(error = %err, "could not decode publish response body");
                PublishResponse::default()
            }
        };
        Ok(Ack::new(body.message_ids.into_iter().next()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_body_wraps_payload_in_envelope() {
        let payload = br#"{"type":"move","player_id":"p1","direction":"LEFT"}"#;
        let body = publish_body(payload);

        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 1);

        let data = messages[0]["data"].as_str().unwrap();
        let decoded = STANDARD.decode(data).unwrap();
        assert_eq!(decoded, payload, "data must decode back to the payload");
    }

    #[test]
    fn test_publish_body_has_no_extra_fields() {
        let body = publish_body(b"{}");
        assert_eq!(body.as_object().unwrap().len(), 1);
        assert_eq!(
            body["messages"][0].as_object().unwrap().len(),
            1,
            "each message carries only the data field"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let publisher = HttpPublisher::new("http://localhost:8085/v1/");
        assert_eq!(publisher.base_url, "http://localhost:8085/v1");
    }
}
