//! Reservations API routes
//!
//! This module wires up the reservations domain to HTTP routes.

use axum::Router;
use domain_reservations::handlers;

use super::BookingService;

/// Create the reservations router
pub fn router(service: BookingService) -> Router {
    // The domain owns its routes; this module only does the wiring
    handlers::router(service)
}
