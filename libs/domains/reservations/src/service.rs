//! Reservation Service - Business logic layer

use messaging::{EventPublisher, Topic};
use std::sync::Arc;
use tracing::{instrument, warn};
use uuid::Uuid;
use validator::Validate;

use crate::error::{ReservationError, ReservationResult};
use crate::models::{CreateReservation, Reservation};
use crate::repository::ReservationRepository;

/// Reservation service providing business logic operations
///
/// The service layer handles validation, orchestrates repository operations,
/// and publishes lifecycle events. The store write is the durability
/// boundary: a reservation exists once `save` succeeds, and the lifecycle
/// event that follows is best-effort. A failed publish is logged and never
/// rolls back or fails the store mutation.
pub struct ReservationService<R: ReservationRepository, P: EventPublisher> {
    repository: Arc<R>,
    publisher: Arc<P>,
    topic: Topic,
}

impl<R: ReservationRepository, P: EventPublisher> ReservationService<R, P> {
    /// Create a new ReservationService
    pub fn new(repository: R, publisher: Arc<P>, topic: Topic) -> Self {
        Self {
            repository: Arc::new(repository),
            publisher,
            topic,
        }
    }

    /// Create a new reservation
    ///
    /// Persists first, then publishes a created event. The persisted
    /// reservation is returned regardless of the publish outcome.
    #[instrument(skip(self, input), fields(facility = %input.facility_name))]
    pub async fn create_reservation(
        &self,
        input: CreateReservation,
    ) -> ReservationResult<Reservation> {
        input
            .validate()
            .map_err(|e| ReservationError::Validation(e.to_string()))?;

        let reservation = self.repository.save(Reservation::new(input)).await?;

        self.publish_event(&format!(
            "Created reservation with ID: {}",
            reservation.id
        ))
        .await;

        Ok(reservation)
    }

    /// Get a reservation by ID
    #[instrument(skip(self))]
    pub async fn get_reservation(&self, id: Uuid) -> ReservationResult<Reservation> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ReservationError::NotFound(id))
    }

    /// Cancel a reservation
    ///
    /// Cancellation removes the record from the store. A cancelled event is
    /// published only after a record was actually deleted; cancelling an
    /// unknown id is NotFound and publishes nothing.
    #[instrument(skip(self))]
    pub async fn cancel_reservation(&self, id: Uuid) -> ReservationResult<()> {
        let deleted = self.repository.delete_by_id(id).await?;
        if !deleted {
            return Err(ReservationError::NotFound(id));
        }

        self.publish_event(&format!("Cancelled reservation with ID: {}", id))
            .await;

        Ok(())
    }

    /// Publish a fixed diagnostic message to the event topic.
    ///
    /// Unlike lifecycle events, a failed diagnostic publish is surfaced so
    /// the caller can see the broker is unreachable.
    #[instrument(skip(self))]
    pub async fn send_test_message(&self) -> ReservationResult<()> {
        self.publisher
            .publish(&self.topic, "Hello from the booking service!")
            .await
            .map_err(|e| ReservationError::Publish(e.to_string()))
    }

    /// Best-effort lifecycle event publication.
    async fn publish_event(&self, payload: &str) {
        if let Err(e) = self.publisher.publish(&self.topic, payload).await {
            warn!(error = %e, payload = %payload, "Failed to publish reservation event");
        }
    }
}

impl<R: ReservationRepository, P: EventPublisher> Clone for ReservationService<R, P> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            publisher: Arc::clone(&self.publisher),
            topic: self.topic.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReservationStatus;
    use crate::repository::MockReservationRepository;
    use messaging::{FailingPublisher, RecordingPublisher};

    fn topic() -> Topic {
        Topic::new("myExchange", "myRoutingKey")
    }

    fn create_input() -> CreateReservation {
        CreateReservation {
            user_id: "u1".to_string(),
            facility_name: "Room A".to_string(),
            reservation_date: 1_700_000_000,
            status: ReservationStatus::Confirmed,
        }
    }

    #[tokio::test]
    async fn test_create_persists_and_publishes_created_event() {
        let mut repo = MockReservationRepository::new();
        repo.expect_save().times(1).returning(Ok);
        let publisher = Arc::new(RecordingPublisher::new());

        let service = ReservationService::new(repo, publisher.clone(), topic());
        let reservation = service.create_reservation(create_input()).await.unwrap();

        assert!(!reservation.id.is_nil());
        assert_eq!(reservation.user_id, "u1");
        assert_eq!(reservation.facility_name, "Room A");
        assert_eq!(reservation.reservation_date, 1_700_000_000);
        assert_eq!(reservation.status, ReservationStatus::Confirmed);

        let payloads = publisher.payloads();
        assert_eq!(payloads.len(), 1);
        assert_eq!(
            payloads[0],
            format!("Created reservation with ID: {}", reservation.id)
        );
    }

    #[tokio::test]
    async fn test_create_succeeds_when_publish_fails() {
        let mut repo = MockReservationRepository::new();
        repo.expect_save().times(1).returning(Ok);
        let publisher = Arc::new(FailingPublisher::new());

        let service = ReservationService::new(repo, publisher.clone(), topic());
        let reservation = service.create_reservation(create_input()).await.unwrap();

        // Publish was attempted exactly once, and the failure did not
        // propagate to the caller
        let attempts = publisher.attempts();
        assert_eq!(attempts.len(), 1);
        assert!(attempts[0].contains(&reservation.id.to_string()));
    }

    #[tokio::test]
    async fn test_create_aborts_on_storage_failure_without_publishing() {
        let mut repo = MockReservationRepository::new();
        repo.expect_save()
            .times(1)
            .returning(|_| Err(ReservationError::Storage("write failed".to_string())));
        let publisher = Arc::new(RecordingPublisher::new());

        let service = ReservationService::new(repo, publisher.clone(), topic());
        let result = service.create_reservation(create_input()).await;

        assert!(matches!(result, Err(ReservationError::Storage(_))));
        assert!(publisher.payloads().is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input() {
        let mut repo = MockReservationRepository::new();
        repo.expect_save().never();
        let publisher = Arc::new(RecordingPublisher::new());

        let service = ReservationService::new(repo, publisher.clone(), topic());
        let input = CreateReservation {
            user_id: String::new(),
            ..create_input()
        };
        let result = service.create_reservation(input).await;

        assert!(matches!(result, Err(ReservationError::Validation(_))));
        assert!(publisher.payloads().is_empty());
    }

    #[tokio::test]
    async fn test_get_returns_reservation() {
        let stored = Reservation::new(create_input());
        let id = stored.id;
        let expected = stored.clone();

        let mut repo = MockReservationRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));

        let service =
            ReservationService::new(repo, Arc::new(RecordingPublisher::new()), topic());
        let found = service.get_reservation(id).await.unwrap();

        assert_eq!(found, expected);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let mut repo = MockReservationRepository::new();
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service =
            ReservationService::new(repo, Arc::new(RecordingPublisher::new()), topic());
        let result = service.get_reservation(Uuid::now_v7()).await;

        assert!(matches!(result, Err(ReservationError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_cancel_deletes_and_publishes_cancelled_event() {
        let id = Uuid::now_v7();
        let mut repo = MockReservationRepository::new();
        repo.expect_delete_by_id().times(1).returning(|_| Ok(true));
        let publisher = Arc::new(RecordingPublisher::new());

        let service = ReservationService::new(repo, publisher.clone(), topic());
        service.cancel_reservation(id).await.unwrap();

        assert_eq!(
            publisher.payloads(),
            vec![format!("Cancelled reservation with ID: {}", id)]
        );
    }

    #[tokio::test]
    async fn test_cancel_unknown_id_is_not_found_and_publishes_nothing() {
        let mut repo = MockReservationRepository::new();
        repo.expect_delete_by_id().times(1).returning(|_| Ok(false));
        let publisher = Arc::new(RecordingPublisher::new());

        let service = ReservationService::new(repo, publisher.clone(), topic());
        let result = service.cancel_reservation(Uuid::now_v7()).await;

        assert!(matches!(result, Err(ReservationError::NotFound(_))));
        assert!(publisher.payloads().is_empty());
    }

    #[tokio::test]
    async fn test_cancel_succeeds_when_publish_fails() {
        let mut repo = MockReservationRepository::new();
        repo.expect_delete_by_id().times(1).returning(|_| Ok(true));
        let publisher = Arc::new(FailingPublisher::new());

        let service = ReservationService::new(repo, publisher.clone(), topic());
        service.cancel_reservation(Uuid::now_v7()).await.unwrap();

        assert_eq!(publisher.attempts().len(), 1);
    }

    #[tokio::test]
    async fn test_send_test_message_publishes_fixed_payload() {
        let repo = MockReservationRepository::new();
        let publisher = Arc::new(RecordingPublisher::new());

        let service = ReservationService::new(repo, publisher.clone(), topic());
        service.send_test_message().await.unwrap();

        assert_eq!(
            publisher.payloads(),
            vec!["Hello from the booking service!"]
        );
    }

    #[tokio::test]
    async fn test_send_test_message_surfaces_publish_failure() {
        let repo = MockReservationRepository::new();
        let publisher = Arc::new(FailingPublisher::new());

        let service = ReservationService::new(repo, publisher, topic());
        let result = service.send_test_message().await;

        assert!(matches!(result, Err(ReservationError::Publish(_))));
    }
}
