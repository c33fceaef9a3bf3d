//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Booking API",
        version = "0.1.0",
        description = "Reservation management with MongoDB persistence and queue-published lifecycle events",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(crate::api::messages::send_message),
    components(
        responses(axum_helpers::errors::responses::ServiceUnavailableResponse)
    ),
    nest(
        (path = "/reservations", api = domain_reservations::ApiDoc)
    ),
    tags(
        (name = "Reservations", description = "Reservation management endpoints"),
        (name = "Messaging", description = "Diagnostic messaging endpoints")
    )
)]
pub struct ApiDoc;
