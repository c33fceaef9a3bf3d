//! Broker topology: exchange, routing key, and the durable queue bound to them.

use async_nats::jetstream;
use core_config::{env_or_default, ConfigError, FromEnv};
use tracing::{debug, info};

use crate::error::TopologyError;

/// A publish destination: exchange plus routing key.
///
/// On NATS the pair maps to the subject `"{exchange}.{routing_key}"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Topic {
    pub exchange: String,
    pub routing_key: String,
}

impl Topic {
    pub fn new(exchange: impl Into<String>, routing_key: impl Into<String>) -> Self {
        Self {
            exchange: exchange.into(),
            routing_key: routing_key.into(),
        }
    }

    /// The NATS subject this topic maps to.
    pub fn subject(&self) -> String {
        format!("{}.{}", self.exchange, self.routing_key)
    }
}

/// The fixed broker topology: one durable queue bound to one exchange and
/// routing key.
///
/// Declared idempotently once at service startup via [`Topology::declare`];
/// per-request code never touches topology.
#[derive(Clone, Debug)]
pub struct Topology {
    /// Durable queue name (JetStream stream name)
    pub queue: String,
    /// Exchange name
    pub exchange: String,
    /// Routing key binding the queue to the exchange
    pub routing_key: String,
}

impl Topology {
    /// The topic events are published to.
    pub fn topic(&self) -> Topic {
        Topic::new(self.exchange.clone(), self.routing_key.clone())
    }

    /// The subject the queue captures.
    pub fn subject(&self) -> String {
        self.topic().subject()
    }

    /// Durable consumer name used by the queue listener.
    pub fn consumer_name(&self) -> String {
        format!("{}-processor", self.queue)
    }

    /// Declare the queue (stream) on the broker. Idempotent: an existing
    /// queue with the same name is left untouched.
    pub async fn declare(&self, jetstream: &jetstream::Context) -> Result<(), TopologyError> {
        match jetstream.get_stream(&self.queue).await {
            Ok(_) => {
                debug!(queue = %self.queue, "Queue already declared");
                Ok(())
            }
            Err(_) => {
                info!(
                    queue = %self.queue,
                    exchange = %self.exchange,
                    routing_key = %self.routing_key,
                    subject = %self.subject(),
                    "Declaring queue"
                );

                jetstream
                    .create_stream(jetstream::stream::Config {
                        name: self.queue.clone(),
                        subjects: vec![self.subject()],
                        ..Default::default()
                    })
                    .await
                    .map_err(|e| TopologyError::Declare {
                        queue: self.queue.clone(),
                        details: e.to_string(),
                    })?;

                Ok(())
            }
        }
    }
}

impl Default for Topology {
    fn default() -> Self {
        Self {
            queue: "myQueue".to_string(),
            exchange: "myExchange".to_string(),
            routing_key: "myRoutingKey".to_string(),
        }
    }
}

/// Environment variables:
/// - `EVENT_QUEUE` (default: myQueue)
/// - `EVENT_EXCHANGE` (default: myExchange)
/// - `EVENT_ROUTING_KEY` (default: myRoutingKey)
impl FromEnv for Topology {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            queue: env_or_default("EVENT_QUEUE", "myQueue"),
            exchange: env_or_default("EVENT_EXCHANGE", "myExchange"),
            routing_key: env_or_default("EVENT_ROUTING_KEY", "myRoutingKey"),
        })
    }
}
