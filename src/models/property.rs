use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::dto::{PropertyBlockResponse, PropertyResponse, UpsertPropertyRequest};

/// Property model (database entity)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Property {
    pub id: Uuid,
    pub name: String,
    pub owner_user_id: Uuid,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    /// Smallest currency unit, per guest per night
    pub price_per_guest: i64,
    pub created_at: DateTime<Utc>,
}

impl Property {
    /// Create a new property from an upsert request
    pub fn new(request: UpsertPropertyRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: request.name,
            owner_user_id: request.owner_user_id,
            address_line1: request.address_line1,
            address_line2: request.address_line2,
            city: request.city,
            state: request.state,
            country: request.country,
            postal_code: request.postal_code,
            price_per_guest: request.price_per_guest,
            created_at: Utc::now(),
        }
    }

    /// Apply an upsert request to an existing property, replacing all fields
    pub fn apply(&mut self, request: UpsertPropertyRequest) {
        self.name = request.name;
        self.owner_user_id = request.owner_user_id;
        self.address_line1 = request.address_line1;
        self.address_line2 = request.address_line2;
        self.city = request.city;
        self.state = request.state;
        self.country = request.country;
        self.postal_code = request.postal_code;
        self.price_per_guest = request.price_per_guest;
    }

    /// Convert to response
    pub fn to_response(&self) -> PropertyResponse {
        PropertyResponse {
            id: self.id,
            name: self.name.clone(),
            owner_user_id: self.owner_user_id,
            address_line1: self.address_line1.clone(),
            address_line2: self.address_line2.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            country: self.country.clone(),
            postal_code: self.postal_code.clone(),
            price_per_guest: self.price_per_guest,
            created_at: self.created_at,
        }
    }
}

/// Administrative unavailability marker for one calendar date on one property.
/// One row per (property_id, date); independent of bookings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PropertyBlock {
    pub id: Uuid,
    pub property_id: Uuid,
    pub date: NaiveDate,
    pub reason: Option<String>,
}

impl PropertyBlock {
    pub fn new(property_id: Uuid, date: NaiveDate, reason: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            property_id,
            date,
            reason,
        }
    }

    pub fn to_response(&self) -> PropertyBlockResponse {
        PropertyBlockResponse {
            id: self.id,
            property_id: self.property_id,
            date: self.date,
            reason: self.reason.clone(),
        }
    }
}
