//! Error types for messaging operations.

use thiserror::Error;

/// Error publishing an event to the broker.
///
/// A publish is a single delivery attempt; the error always carries the
/// underlying cause so the caller can decide whether to treat it as fatal.
#[derive(Debug, Error)]
pub enum PublishError {
    /// Broker unreachable or connection lost
    #[error("broker connection error: {0}")]
    Connect(String),

    /// Broker reachable but the send was rejected
    #[error("publish rejected: {0}")]
    Rejected(String),

    /// The bounded publish timeout elapsed before the broker acknowledged
    #[error("publish timed out after {0:?}")]
    Timeout(std::time::Duration),
}

/// Error declaring the broker topology at startup.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("failed to declare queue '{queue}': {details}")]
    Declare { queue: String, details: String },

    #[error("failed to create consumer on queue '{queue}': {details}")]
    Consumer { queue: String, details: String },
}
