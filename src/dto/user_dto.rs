use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// User response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Create/update user request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpsertUserRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    pub date_of_birth: NaiveDate,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}
