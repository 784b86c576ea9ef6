use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::BookingStatus;

/// Booking response, including the guests attached to the booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub property_id: Uuid,
    pub user_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: BookingStatus,
    pub total_price: i64,
    pub created_at: DateTime<Utc>,
    pub guests: Vec<BookingGuestResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingGuestResponse {
    pub id: Uuid,
    pub name: String,
    pub date_of_birth: NaiveDate,
}

/// Guest payload used by both create and update booking requests
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookingGuestRequest {
    #[validate(length(min = 1, max = 100, message = "Guest name must be between 1 and 100 characters"))]
    pub name: String,

    pub date_of_birth: NaiveDate,
}

/// Create booking request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBookingRequest {
    pub property_id: Uuid,

    pub user_id: Uuid,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,

    #[validate(nested)]
    pub guests: Vec<BookingGuestRequest>,
}

/// Update booking request. The property and user of a booking never change;
/// only dates and guests do.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateBookingRequest {
    pub start_date: NaiveDate,

    pub end_date: NaiveDate,

    #[validate(nested)]
    pub guests: Vec<BookingGuestRequest>,
}
