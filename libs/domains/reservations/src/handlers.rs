use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use messaging::EventPublisher;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ReservationResult;
use crate::models::{CreateReservation, Reservation};
use crate::repository::ReservationRepository;
use crate::service::ReservationService;

/// OpenAPI documentation for the Reservations API
#[derive(OpenApi)]
#[openapi(
    paths(create_reservation, get_reservation, cancel_reservation),
    components(
        schemas(Reservation, CreateReservation),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Reservations", description = "Reservation management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the reservations router with all HTTP endpoints
pub fn router<R, P>(service: ReservationService<R, P>) -> Router
where
    R: ReservationRepository + 'static,
    P: EventPublisher + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", axum::routing::post(create_reservation))
        .route(
            "/{id}",
            get(get_reservation).delete(cancel_reservation),
        )
        .with_state(shared_service)
}

/// Create a new reservation
#[utoipa::path(
    post,
    path = "",
    tag = "Reservations",
    request_body = CreateReservation,
    responses(
        (status = 200, description = "Reservation created with an assigned id", body = Reservation),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_reservation<R: ReservationRepository, P: EventPublisher>(
    State(service): State<Arc<ReservationService<R, P>>>,
    ValidatedJson(input): ValidatedJson<CreateReservation>,
) -> ReservationResult<Json<Reservation>> {
    let reservation = service.create_reservation(input).await?;
    Ok(Json(reservation))
}

/// Get a reservation by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Reservations",
    params(
        ("id" = Uuid, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation found", body = Reservation),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_reservation<R: ReservationRepository, P: EventPublisher>(
    State(service): State<Arc<ReservationService<R, P>>>,
    UuidPath(id): UuidPath,
) -> ReservationResult<Json<Reservation>> {
    let reservation = service.get_reservation(id).await?;
    Ok(Json(reservation))
}

/// Cancel a reservation
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Reservations",
    params(
        ("id" = Uuid, Path, description = "Reservation ID")
    ),
    responses(
        (status = 204, description = "Reservation cancelled"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn cancel_reservation<R: ReservationRepository, P: EventPublisher>(
    State(service): State<Arc<ReservationService<R, P>>>,
    UuidPath(id): UuidPath,
) -> ReservationResult<impl IntoResponse> {
    service.cancel_reservation(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
