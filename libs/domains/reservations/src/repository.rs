use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ReservationResult;
use crate::models::Reservation;

/// Repository trait for Reservation persistence
///
/// This trait defines the data access interface for reservations.
/// Implementations can use different storage backends (MongoDB, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Persist a reservation
    async fn save(&self, reservation: Reservation) -> ReservationResult<Reservation>;

    /// Find a reservation by ID
    async fn find_by_id(&self, id: Uuid) -> ReservationResult<Option<Reservation>>;

    /// Delete a reservation by ID, returning whether a record was removed
    async fn delete_by_id(&self, id: Uuid) -> ReservationResult<bool>;
}
