//! Diagnostic messaging endpoint
//!
//! `GET /send` publishes a fixed test payload to the event topic, so an
//! operator can verify broker connectivity end to end (the queue listener
//! picks the message up and re-publishes its processed form).

use axum::{Router, extract::State, routing::get};
use axum_helpers::errors::responses::ServiceUnavailableResponse;
use std::sync::Arc;

use super::BookingService;
use domain_reservations::ReservationResult;

/// Create the messaging router
pub fn router(service: BookingService) -> Router {
    Router::new()
        .route("/send", get(send_message))
        .with_state(Arc::new(service))
}

/// Publish a test message to the event topic
#[utoipa::path(
    get,
    path = "/send",
    tag = "Messaging",
    responses(
        (status = 200, description = "Test message published", body = String),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
pub(crate) async fn send_message(
    State(service): State<Arc<BookingService>>,
) -> ReservationResult<&'static str> {
    service.send_test_message().await?;
    Ok("Message sent")
}
