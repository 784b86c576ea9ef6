use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Property response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyResponse {
    pub id: Uuid,
    pub name: String,
    pub owner_user_id: Uuid,
    pub address_line1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    pub price_per_guest: i64,
    pub created_at: DateTime<Utc>,
}

/// Create/update property request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpsertPropertyRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be between 1 and 200 characters"))]
    pub name: String,

    pub owner_user_id: Uuid,

    #[validate(length(min = 1, message = "Address line 1 is required"))]
    pub address_line1: String,

    pub address_line2: Option<String>,

    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,

    #[validate(length(min = 1, message = "State is required"))]
    pub state: String,

    #[validate(length(min = 1, message = "Country is required"))]
    pub country: String,

    #[validate(length(min = 1, message = "Postal code is required"))]
    pub postal_code: String,

    #[validate(range(min = 1, message = "Price per guest must be positive"))]
    pub price_per_guest: i64,
}

/// Block dates request. An absent or empty date set is a no-op.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockDatesRequest {
    #[serde(default)]
    pub dates: BTreeSet<NaiveDate>,
    pub reason: Option<String>,
}

/// Unblock dates request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnblockDatesRequest {
    #[serde(default)]
    pub dates: BTreeSet<NaiveDate>,
}

/// Query range for listing blocked dates
#[derive(Debug, Clone, Deserialize)]
pub struct BlockedDatesQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Property block response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyBlockResponse {
    pub id: Uuid,
    pub property_id: Uuid,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
