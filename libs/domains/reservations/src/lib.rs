//! Reservations Domain
//!
//! This module provides a complete domain implementation for managing
//! reservations backed by MongoDB, with lifecycle events published to a
//! durable message queue.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐      ┌─────────────┐
//! │   Service   │─────▶│  Publisher  │  ← lifecycle events (best-effort)
//! └──────┬──────┘      └─────────────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_reservations::{
//!     handlers,
//!     mongodb::MongoReservationRepository,
//!     service::ReservationService,
//! };
//! use messaging::{NatsPublisher, Topic};
//! use mongodb::Client;
//! use std::sync::Arc;
//!
//! # async fn example(publisher: NatsPublisher) -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("booking");
//!
//! let repository = MongoReservationRepository::new(db);
//! let topic = Topic::new("myExchange", "myRoutingKey");
//! let service = ReservationService::new(repository, Arc::new(publisher), topic);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ReservationError, ReservationResult};
pub use handlers::ApiDoc;
pub use models::{CreateReservation, Reservation, ReservationStatus};
pub use mongodb::MongoReservationRepository;
pub use repository::ReservationRepository;
pub use service::ReservationService;
