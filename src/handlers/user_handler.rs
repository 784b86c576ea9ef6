use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::config::AppState;
use crate::dto::{UpsertUserRequest, UserResponse};
use crate::interceptors::{ApiSuccess, AppError};
use crate::services::UserService;

/// Get user by id
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<ApiSuccess<UserResponse>, AppError> {
    let user_service = UserService::new(state.repos.clone());
    let user = user_service.retrieve_user(user_id).await?;

    Ok(ApiSuccess::new("User retrieved successfully", user))
}

/// Create user
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<UpsertUserRequest>,
) -> Result<ApiSuccess<UserResponse>, AppError> {
    let user_service = UserService::new(state.repos.clone());
    let created = user_service.create_user(request).await?;

    Ok(ApiSuccess::new("User created successfully", created))
}

/// Update user
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(request): Json<UpsertUserRequest>,
) -> Result<ApiSuccess<UserResponse>, AppError> {
    let user_service = UserService::new(state.repos.clone());
    let updated = user_service.update_user(user_id, request).await?;

    Ok(ApiSuccess::new("User updated successfully", updated))
}

/// Delete user
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<ApiSuccess<()>, AppError> {
    let user_service = UserService::new(state.repos.clone());
    user_service.delete_user(user_id).await?;

    Ok(ApiSuccess::<()>::new_without_data("User deleted successfully"))
}
