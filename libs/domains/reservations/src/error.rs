use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ReservationError {
    #[error("Reservation not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Publish error: {0}")]
    Publish(String),
}

pub type ReservationResult<T> = Result<T, ReservationError>;

/// Convert ReservationError to AppError for standardized error responses
impl From<ReservationError> for AppError {
    fn from(err: ReservationError) -> Self {
        match err {
            ReservationError::NotFound(id) => {
                AppError::NotFound(format!("Reservation {} not found", id))
            }
            ReservationError::Validation(msg) => AppError::BadRequest(msg),
            ReservationError::Storage(msg) => AppError::InternalServerError(msg),
            ReservationError::Publish(msg) => AppError::ServiceUnavailable(msg),
        }
    }
}

impl IntoResponse for ReservationError {
    fn into_response(self) -> Response {
        // Convert to AppError for the standardized error response format
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ReservationError {
    fn from(err: mongodb::error::Error) -> Self {
        ReservationError::Storage(err.to_string())
    }
}
