use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::dto::{BookingGuestResponse, BookingResponse};

/// Booking lifecycle status. The only transitions are BOOKED -> CANCELED
/// (cancel) and CANCELED -> BOOKED (rebook).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "booking_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    Booked,
    Canceled,
}

/// Booking model (database entity). Guests are stored in their own table and
/// loaded separately.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub property_id: Uuid,
    pub user_id: Uuid,
    pub start_date: NaiveDate,
    /// Inclusive: a booking for a single day has start_date == end_date
    pub end_date: NaiveDate,
    pub status: BookingStatus,
    pub total_price: i64,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(
        property_id: Uuid,
        user_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        total_price: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            property_id,
            user_id,
            start_date,
            end_date,
            status: BookingStatus::Booked,
            total_price,
            created_at: Utc::now(),
        }
    }

    /// Convert to response together with the guests attached to this booking
    pub fn to_response(&self, guests: &[BookingGuest]) -> BookingResponse {
        BookingResponse {
            id: self.id,
            property_id: self.property_id,
            user_id: self.user_id,
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status,
            total_price: self.total_price,
            created_at: self.created_at,
            guests: guests.iter().map(BookingGuest::to_response).collect(),
        }
    }
}

/// Guest attached to a booking. Owned exclusively by one booking and replaced
/// wholesale on every create/update of the parent.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookingGuest {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub name: String,
    pub date_of_birth: NaiveDate,
}

impl BookingGuest {
    pub fn new(booking_id: Uuid, name: String, date_of_birth: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            booking_id,
            name,
            date_of_birth,
        }
    }

    pub fn to_response(&self) -> BookingGuestResponse {
        BookingGuestResponse {
            id: self.id,
            name: self.name.clone(),
            date_of_birth: self.date_of_birth,
        }
    }
}
