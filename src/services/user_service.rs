use std::sync::Arc;

use uuid::Uuid;

use crate::dto::{UpsertUserRequest, UserResponse};
use crate::interceptors::{AppError, AppResult};
use crate::models::User;
use crate::repositories::{Repositories, UserRepository};
use crate::utils::validate_request;

/// User CRUD. Users are created independently and referenced by properties
/// (owner) and bookings.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repos: Repositories) -> Self {
        Self { users: repos.users }
    }

    /// Get a user by id
    pub async fn retrieve_user(&self, user_id: Uuid) -> AppResult<UserResponse> {
        let user = self.find_user(user_id).await?;

        Ok(user.to_response())
    }

    /// Create a user
    pub async fn create_user(&self, request: UpsertUserRequest) -> AppResult<UserResponse> {
        validate_request(&request)?;

        let user = User::new(request.name, request.date_of_birth, request.email);
        let saved = self.users.insert(user).await?;

        Ok(saved.to_response())
    }

    /// Replace all fields of a user
    pub async fn update_user(
        &self,
        user_id: Uuid,
        request: UpsertUserRequest,
    ) -> AppResult<UserResponse> {
        validate_request(&request)?;

        let mut user = self.find_user(user_id).await?;

        user.name = request.name;
        user.date_of_birth = request.date_of_birth;
        user.email = request.email;

        let saved = self.users.update(user).await?;

        Ok(saved.to_response())
    }

    /// Delete a user. Idempotent: a non-existent id is a no-op success.
    pub async fn delete_user(&self, user_id: Uuid) -> AppResult<()> {
        self.users.delete_by_id(user_id).await?;

        Ok(())
    }

    async fn find_user(&self, user_id: Uuid) -> AppResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No user found with id {user_id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{
        MockBookingGuestRepository, MockBookingRepository, MockPropertyBlockRepository,
        MockPropertyRepository, MockUserRepository,
    };
    use chrono::NaiveDate;

    fn service(users: MockUserRepository) -> UserService {
        UserService::new(Repositories {
            users: Arc::new(users),
            properties: Arc::new(MockPropertyRepository::new()),
            bookings: Arc::new(MockBookingRepository::new()),
            guests: Arc::new(MockBookingGuestRepository::new()),
            blocks: Arc::new(MockPropertyBlockRepository::new()),
        })
    }

    fn upsert_request() -> UpsertUserRequest {
        UpsertUserRequest {
            name: "Ada".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 6, 1).unwrap(),
            email: "ada@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn retrieve_fails_when_user_is_missing() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| Ok(None));

        let result = service(users).retrieve_user(Uuid::new_v4()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn create_rejects_an_invalid_email() {
        let users = MockUserRepository::new();

        let mut request = upsert_request();
        request.email = "not-an-email".to_string();

        let result = service(users).create_user(request).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn create_persists_and_returns_the_user() {
        let mut users = MockUserRepository::new();
        users.expect_insert().times(1).returning(|user| Ok(user));

        let response = service(users).create_user(upsert_request()).await.unwrap();

        assert_eq!(response.name, "Ada");
        assert_eq!(response.email, "ada@example.com");
    }

    #[tokio::test]
    async fn update_replaces_all_fields() {
        let existing = User::new(
            "Old Name".to_string(),
            NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
            "old@example.com".to_string(),
        );
        let user_id = existing.id;

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        users.expect_update().returning(|user| Ok(user));

        let response = service(users)
            .update_user(user_id, upsert_request())
            .await
            .unwrap();

        assert_eq!(response.id, user_id);
        assert_eq!(response.name, "Ada");
    }

    #[tokio::test]
    async fn delete_is_idempotent_for_unknown_ids() {
        let mut users = MockUserRepository::new();
        users.expect_delete_by_id().times(1).returning(|_| Ok(()));

        let result = service(users).delete_user(Uuid::new_v4()).await;

        assert!(result.is_ok());
    }
}
