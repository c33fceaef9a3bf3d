//! Application state management.
//!
//! This module defines the shared application state passed to all request
//! handlers. The state contains:
//! - Configuration
//! - MongoDB client and database
//! - NATS client and JetStream publisher

use messaging::NatsPublisher;
use mongodb::{Client, Database};

/// Shared application state.
///
/// This struct is cloned for each handler (inexpensive Arc clones).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client (cloneable, shares underlying connection pool)
    pub mongo_client: Client,
    /// MongoDB database instance
    pub db: Database,
    /// NATS client, used for readiness checks
    pub nats_client: async_nats::Client,
    /// JetStream-backed event publisher
    pub publisher: NatsPublisher,
}
