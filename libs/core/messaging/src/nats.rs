//! NATS JetStream transport: publisher and durable queue subscription.

use async_nats::jetstream;
use async_nats::jetstream::consumer::pull::Config as ConsumerConfig;
use async_nats::jetstream::consumer::AckPolicy;
use async_trait::async_trait;
use core_config::{env_or_default, ConfigError, FromEnv};
use futures::StreamExt;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::{PublishError, TopologyError};
use crate::listener::{MessageStream, ReceivedMessage};
use crate::publisher::EventPublisher;
use crate::topology::{Topic, Topology};

/// NATS connection and publish settings.
#[derive(Clone, Debug)]
pub struct NatsConfig {
    pub url: String,
    /// Upper bound on a single publish attempt, broker ack included
    pub publish_timeout: Duration,
}

impl Default for NatsConfig {
    fn default() -> Self {
        Self {
            url: "nats://localhost:4222".to_string(),
            publish_timeout: Duration::from_secs(5),
        }
    }
}

/// Environment variables:
/// - `NATS_URL` (default: nats://localhost:4222)
/// - `NATS_PUBLISH_TIMEOUT_SECS` (default: 5)
impl FromEnv for NatsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let timeout_secs = env_or_default("NATS_PUBLISH_TIMEOUT_SECS", "5")
            .parse::<u64>()
            .map_err(|e| ConfigError::ParseError {
                key: "NATS_PUBLISH_TIMEOUT_SECS".to_string(),
                details: e.to_string(),
            })?;

        Ok(Self {
            url: env_or_default("NATS_URL", "nats://localhost:4222"),
            publish_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// [`EventPublisher`] backed by NATS JetStream.
///
/// Each publish is one delivery attempt awaiting the broker's ack, bounded
/// by the configured timeout. The stream captures the subject durably, so
/// an acked publish survives broker restarts.
#[derive(Clone)]
pub struct NatsPublisher {
    jetstream: jetstream::Context,
    publish_timeout: Duration,
}

impl NatsPublisher {
    pub fn new(jetstream: jetstream::Context, config: &NatsConfig) -> Self {
        Self {
            jetstream,
            publish_timeout: config.publish_timeout,
        }
    }
}

#[async_trait]
impl EventPublisher for NatsPublisher {
    async fn publish(&self, topic: &Topic, payload: &str) -> Result<(), PublishError> {
        let subject = topic.subject();

        let attempt = async {
            let ack_future = self
                .jetstream
                .publish(subject.clone(), payload.to_string().into())
                .await
                .map_err(|e| PublishError::Connect(e.to_string()))?;

            let ack = ack_future
                .await
                .map_err(|e| PublishError::Rejected(e.to_string()))?;

            debug!(
                subject = %subject,
                sequence = ack.sequence,
                "Published event"
            );

            Ok(())
        };

        tokio::time::timeout(self.publish_timeout, attempt)
            .await
            .map_err(|_| PublishError::Timeout(self.publish_timeout))?
    }
}

/// Durable pull subscription on the topology's queue, yielding messages
/// for the listener.
///
/// Each yielded message is acked immediately after it is handed out. The
/// listener's transform step is best-effort, so a failed re-publish does
/// not trigger redelivery.
pub struct NatsQueueStream {
    messages: jetstream::consumer::pull::Stream,
}

impl NatsQueueStream {
    /// Bind a durable consumer to the topology's queue, creating it on
    /// first use, and open the message stream.
    pub async fn subscribe(
        jetstream: &jetstream::Context,
        topology: &Topology,
    ) -> Result<Self, TopologyError> {
        let stream =
            jetstream
                .get_stream(&topology.queue)
                .await
                .map_err(|e| TopologyError::Consumer {
                    queue: topology.queue.clone(),
                    details: e.to_string(),
                })?;

        let durable_name = topology.consumer_name();

        let consumer = match stream.get_consumer::<ConsumerConfig>(&durable_name).await {
            Ok(consumer) => {
                debug!(consumer = %durable_name, "Consumer already exists");
                consumer
            }
            Err(_) => {
                info!(
                    consumer = %durable_name,
                    queue = %topology.queue,
                    "Creating consumer"
                );

                stream
                    .create_consumer(ConsumerConfig {
                        durable_name: Some(durable_name.clone()),
                        name: Some(durable_name.clone()),
                        ack_policy: AckPolicy::Explicit,
                        filter_subject: topology.subject(),
                        ..Default::default()
                    })
                    .await
                    .map_err(|e| TopologyError::Consumer {
                        queue: topology.queue.clone(),
                        details: e.to_string(),
                    })?
            }
        };

        let messages = consumer
            .messages()
            .await
            .map_err(|e| TopologyError::Consumer {
                queue: topology.queue.clone(),
                details: e.to_string(),
            })?;

        Ok(Self { messages })
    }
}

#[async_trait]
impl MessageStream for NatsQueueStream {
    async fn next(&mut self) -> Option<ReceivedMessage> {
        loop {
            match self.messages.next().await {
                Some(Ok(msg)) => {
                    let payload = String::from_utf8_lossy(&msg.payload).to_string();
                    let subject = msg.subject.to_string();

                    if let Err(e) = msg.ack().await {
                        warn!(error = %e, subject = %subject, "Failed to ack message");
                    }

                    return Some(ReceivedMessage { subject, payload });
                }
                Some(Err(e)) => {
                    warn!(error = %e, "Error receiving message, continuing");
                }
                None => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nats_config_defaults() {
        temp_env::with_vars(
            [
                ("NATS_URL", None::<&str>),
                ("NATS_PUBLISH_TIMEOUT_SECS", None),
            ],
            || {
                let config = NatsConfig::from_env().unwrap();
                assert_eq!(config.url, "nats://localhost:4222");
                assert_eq!(config.publish_timeout, Duration::from_secs(5));
            },
        );
    }

    #[test]
    fn test_nats_config_from_env() {
        temp_env::with_vars(
            [
                ("NATS_URL", Some("nats://broker:4222")),
                ("NATS_PUBLISH_TIMEOUT_SECS", Some("2")),
            ],
            || {
                let config = NatsConfig::from_env().unwrap();
                assert_eq!(config.url, "nats://broker:4222");
                assert_eq!(config.publish_timeout, Duration::from_secs(2));
            },
        );
    }

    #[test]
    fn test_nats_config_rejects_bad_timeout() {
        temp_env::with_var("NATS_PUBLISH_TIMEOUT_SECS", Some("soon"), || {
            let result = NatsConfig::from_env();
            assert!(matches!(result, Err(ConfigError::ParseError { .. })));
        });
    }
}
