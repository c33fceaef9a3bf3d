//! MongoDB repository integration tests
//!
//! These run against a real MongoDB via testcontainers and exercise the
//! document mapping (Uuid `_id`, camelCase fields) end to end.

use domain_reservations::models::{CreateReservation, Reservation, ReservationStatus};
use domain_reservations::mongodb::MongoReservationRepository;
use domain_reservations::repository::ReservationRepository;
use test_utils::{TestDataBuilder, TestMongo};
use uuid::Uuid;

fn reservation(builder: &TestDataBuilder) -> Reservation {
    Reservation::new(CreateReservation {
        user_id: builder.user_id().to_string(),
        facility_name: builder.name("facility", "main"),
        reservation_date: 1_700_000_000,
        status: ReservationStatus::Confirmed,
    })
}

#[tokio::test]
async fn test_save_and_find_roundtrip() {
    let mongo = TestMongo::new().await;
    let repo = MongoReservationRepository::new(mongo.database("repo_roundtrip"));
    let builder = TestDataBuilder::from_test_name("save_and_find");

    let saved = repo.save(reservation(&builder)).await.unwrap();
    let found = repo.find_by_id(saved.id).await.unwrap();

    assert_eq!(found, Some(saved));
}

#[tokio::test]
async fn test_find_unknown_id_returns_none() {
    let mongo = TestMongo::new().await;
    let repo = MongoReservationRepository::new(mongo.database("repo_find_none"));

    let found = repo.find_by_id(Uuid::now_v7()).await.unwrap();

    assert_eq!(found, None);
}

#[tokio::test]
async fn test_delete_removes_record() {
    let mongo = TestMongo::new().await;
    let repo = MongoReservationRepository::new(mongo.database("repo_delete"));
    let builder = TestDataBuilder::from_test_name("delete_removes");

    let saved = repo.save(reservation(&builder)).await.unwrap();

    assert!(repo.delete_by_id(saved.id).await.unwrap());
    assert_eq!(repo.find_by_id(saved.id).await.unwrap(), None);
}

#[tokio::test]
async fn test_delete_unknown_id_returns_false() {
    let mongo = TestMongo::new().await;
    let repo = MongoReservationRepository::new(mongo.database("repo_delete_none"));

    assert!(!repo.delete_by_id(Uuid::now_v7()).await.unwrap());
}
