use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Reservation status
///
/// Status is set by the caller on create and never transitions
/// automatically. Cancellation removes the record from the store instead of
/// moving it to `Cancelled`; the variant exists for wire compatibility with
/// clients that submit it on create.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReservationStatus {
    /// Awaiting confirmation
    #[default]
    Pending,
    /// Confirmed by the facility
    Confirmed,
    /// Cancelled (never stored; see above)
    Cancelled,
}

/// Reservation entity - represents a booking stored in MongoDB
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// User who booked
    pub user_id: String,
    /// Booked facility
    pub facility_name: String,
    /// Reservation date as a Unix timestamp (seconds)
    pub reservation_date: i64,
    /// Current status
    pub status: ReservationStatus,
}

/// DTO for creating a new reservation
///
/// Any client-supplied id is ignored; the service assigns one.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservation {
    #[validate(length(min = 1, max = 100))]
    pub user_id: String,
    #[validate(length(min = 1, max = 200))]
    pub facility_name: String,
    pub reservation_date: i64,
    #[serde(default)]
    pub status: ReservationStatus,
}

impl Reservation {
    /// Create a new reservation from a CreateReservation DTO
    pub fn new(input: CreateReservation) -> Self {
        Self {
            id: Uuid::now_v7(),
            user_id: input.user_id,
            facility_name: input.facility_name,
            reservation_date: input.reservation_date,
            status: input.status,
        }
    }
}
