use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::dto::UserResponse;

/// User model (database entity)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(name: String, date_of_birth: NaiveDate, email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            date_of_birth,
            email,
            created_at: Utc::now(),
        }
    }

    /// Convert to response
    pub fn to_response(&self) -> UserResponse {
        UserResponse {
            id: self.id,
            name: self.name.clone(),
            date_of_birth: self.date_of_birth,
            email: self.email.clone(),
            created_at: self.created_at,
        }
    }
}
