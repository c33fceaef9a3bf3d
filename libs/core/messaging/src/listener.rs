//! Queue listener: consume → transform → re-publish.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::publisher::EventPublisher;
use crate::topology::Topic;

/// A message received from the queue.
#[derive(Debug, Clone)]
pub struct ReceivedMessage {
    /// Subject the message arrived on
    pub subject: String,
    /// Text payload
    pub payload: String,
}

/// Stream of incoming queue messages.
///
/// Returns `None` when the subscription ends (connection closed or the
/// consumer was deleted).
#[async_trait]
pub trait MessageStream: Send {
    async fn next(&mut self) -> Option<ReceivedMessage>;
}

/// Listener that logs each inbound message and re-publishes a derived
/// `"Processed: <original>"` event.
///
/// Per-message failures are logged and never terminate the subscription:
/// consumption continues with the next message (at-least-once semantics,
/// no redelivery on processing error in the base design).
pub struct EchoListener<P: EventPublisher> {
    publisher: Arc<P>,
    topic: Topic,
}

impl<P: EventPublisher> EchoListener<P> {
    pub fn new(publisher: Arc<P>, topic: Topic) -> Self {
        Self { publisher, topic }
    }

    /// Consume messages until the stream ends.
    pub async fn run<S: MessageStream>(&self, mut stream: S) {
        info!(topic = %self.topic.subject(), "Queue listener started");

        while let Some(msg) = stream.next().await {
            self.handle_message(&msg).await;
        }

        info!("Queue listener stopped: subscription ended");
    }

    /// Process a single message. Failures are reported, not propagated.
    #[instrument(skip(self, msg), fields(subject = %msg.subject))]
    pub async fn handle_message(&self, msg: &ReceivedMessage) {
        info!(payload = %msg.payload, "Received message from queue");

        let derived = format!("Processed: {}", msg.payload);

        if let Err(e) = self.publisher.publish(&self.topic, &derived).await {
            error!(error = %e, "Failed to re-publish processed message");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::publisher::{FailingPublisher, RecordingPublisher};

    struct FixedStream {
        messages: Vec<ReceivedMessage>,
    }

    #[async_trait]
    impl MessageStream for FixedStream {
        async fn next(&mut self) -> Option<ReceivedMessage> {
            if self.messages.is_empty() {
                None
            } else {
                Some(self.messages.remove(0))
            }
        }
    }

    fn msg(payload: &str) -> ReceivedMessage {
        ReceivedMessage {
            subject: "myExchange.myRoutingKey".to_string(),
            payload: payload.to_string(),
        }
    }

    #[tokio::test]
    async fn test_listener_republishes_processed_payload() {
        let publisher = Arc::new(RecordingPublisher::new());
        let listener = EchoListener::new(publisher.clone(), Topic::new("ex", "rk"));

        listener.handle_message(&msg("X")).await;

        assert_eq!(publisher.payloads(), vec!["Processed: X"]);
    }

    #[tokio::test]
    async fn test_listener_continues_after_publish_failure() {
        let publisher = Arc::new(FailingPublisher::new());
        let listener = EchoListener::new(publisher.clone(), Topic::new("ex", "rk"));

        let stream = FixedStream {
            messages: vec![msg("first"), msg("second")],
        };

        // Must not panic or stop on the first failed re-publish
        listener.run(stream).await;

        assert_eq!(
            publisher.attempts(),
            vec!["Processed: first", "Processed: second"]
        );
    }

    #[tokio::test]
    async fn test_listener_drains_stream_in_order() {
        let publisher = Arc::new(RecordingPublisher::new());
        let listener = EchoListener::new(publisher.clone(), Topic::new("ex", "rk"));

        let stream = FixedStream {
            messages: vec![msg("a"), msg("b"), msg("c")],
        };

        listener.run(stream).await;

        assert_eq!(
            publisher.payloads(),
            vec!["Processed: a", "Processed: b", "Processed: c"]
        );
    }
}
