//! Event publishing and queue consumption abstractions.
//!
//! This library models a classic broker topology (a named exchange, a routing
//! key, and a durable queue bound to them) on top of NATS JetStream:
//!
//! - a [`Topic`] (exchange + routing key) maps to the subject
//!   `"{exchange}.{routing_key}"`;
//! - the durable queue maps to a JetStream stream capturing that subject,
//!   consumed through a durable pull consumer.
//!
//! The [`EventPublisher`] trait is the single outbound seam: one delivery
//! attempt per call, typed errors, no internal retries. Callers decide
//! whether a publish failure is fatal.
//!
//! # Example
//!
//! ```ignore
//! use messaging::{EventPublisher, NatsConfig, NatsPublisher, Topology};
//!
//! let topology = Topology::from_env()?;
//! let client = async_nats::connect(&config.url).await?;
//! let jetstream = async_nats::jetstream::new(client);
//! topology.declare(&jetstream).await?;
//!
//! let publisher = NatsPublisher::new(jetstream, &NatsConfig::default());
//! publisher.publish(&topology.topic(), "hello").await?;
//! ```

mod error;
mod listener;
mod nats;
mod publisher;
mod topology;

pub use error::{PublishError, TopologyError};
pub use listener::{EchoListener, MessageStream, ReceivedMessage};
pub use nats::{NatsConfig, NatsPublisher, NatsQueueStream};
pub use publisher::{EventPublisher, FailingPublisher, RecordingPublisher};
pub use topology::{Topic, Topology};
