//! MongoDB implementation of ReservationRepository

use async_trait::async_trait;
use mongodb::{
    Collection, Database,
    bson::{Bson, doc, to_bson},
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::ReservationResult;
use crate::models::Reservation;
use crate::repository::ReservationRepository;

/// MongoDB implementation of the ReservationRepository
pub struct MongoReservationRepository {
    collection: Collection<Reservation>,
}

impl MongoReservationRepository {
    /// Create a new MongoReservationRepository
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let db = client.database("booking");
    /// let repo = MongoReservationRepository::new(db);
    /// ```
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<Reservation>("reservations");
        Self { collection }
    }

    /// Create a repository with a custom collection name
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<Reservation>(collection_name);
        Self { collection }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Reservation> {
        &self.collection
    }

    fn id_filter(id: Uuid) -> mongodb::bson::Document {
        doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) }
    }
}

#[async_trait]
impl ReservationRepository for MongoReservationRepository {
    #[instrument(skip(self, reservation), fields(reservation_id = %reservation.id))]
    async fn save(&self, reservation: Reservation) -> ReservationResult<Reservation> {
        self.collection.insert_one(&reservation).await?;

        tracing::info!(reservation_id = %reservation.id, "Reservation saved");
        Ok(reservation)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> ReservationResult<Option<Reservation>> {
        let reservation = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(reservation)
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: Uuid) -> ReservationResult<bool> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;

        if result.deleted_count > 0 {
            tracing::info!(reservation_id = %id, "Reservation deleted");
        }
        Ok(result.deleted_count > 0)
    }
}
