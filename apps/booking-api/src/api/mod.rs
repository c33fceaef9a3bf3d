//! API routes module
//!
//! This module defines all HTTP API routes for the booking API.

pub mod health;
pub mod messages;
pub mod reservations;

use axum::Router;
use domain_reservations::{MongoReservationRepository, ReservationService};
use messaging::NatsPublisher;
use std::sync::Arc;

use crate::state::AppState;

/// The concrete service type wired into the HTTP surface
pub type BookingService = ReservationService<MongoReservationRepository, NatsPublisher>;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    let repository = MongoReservationRepository::new(state.db.clone());
    let service = ReservationService::new(
        repository,
        Arc::new(state.publisher.clone()),
        state.config.topology.topic(),
    );

    Router::new()
        .nest("/reservations", reservations::router(service.clone()))
        .merge(messages::router(service))
        .merge(health::router(state.clone()))
}
