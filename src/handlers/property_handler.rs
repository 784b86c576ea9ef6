use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::config::AppState;
use crate::dto::{
    BlockDatesRequest, BlockedDatesQuery, PropertyBlockResponse, PropertyResponse,
    UnblockDatesRequest, UpsertPropertyRequest,
};
use crate::interceptors::{ApiSuccess, AppError};
use crate::services::PropertyService;

/// Get property by id
pub async fn get_property(
    State(state): State<AppState>,
    Path(property_id): Path<Uuid>,
) -> Result<ApiSuccess<PropertyResponse>, AppError> {
    let property_service = PropertyService::new(state.repos.clone());
    let property = property_service.retrieve_property(property_id).await?;

    Ok(ApiSuccess::new("Property retrieved successfully", property))
}

/// Create property
pub async fn create_property(
    State(state): State<AppState>,
    Json(request): Json<UpsertPropertyRequest>,
) -> Result<ApiSuccess<PropertyResponse>, AppError> {
    let property_service = PropertyService::new(state.repos.clone());
    let created = property_service.create_property(request).await?;

    Ok(ApiSuccess::new("Property created successfully", created))
}

/// Update property
pub async fn update_property(
    State(state): State<AppState>,
    Path(property_id): Path<Uuid>,
    Json(request): Json<UpsertPropertyRequest>,
) -> Result<ApiSuccess<PropertyResponse>, AppError> {
    let property_service = PropertyService::new(state.repos.clone());
    let updated = property_service.update_property(property_id, request).await?;

    Ok(ApiSuccess::new("Property updated successfully", updated))
}

/// Delete property and its blocks
pub async fn delete_property(
    State(state): State<AppState>,
    Path(property_id): Path<Uuid>,
) -> Result<ApiSuccess<()>, AppError> {
    let property_service = PropertyService::new(state.repos.clone());
    property_service.delete_property(property_id).await?;

    Ok(ApiSuccess::<()>::new_without_data("Property deleted successfully"))
}

/// Block individual dates on a property
pub async fn block_property_dates(
    State(state): State<AppState>,
    Path(property_id): Path<Uuid>,
    Json(request): Json<BlockDatesRequest>,
) -> Result<ApiSuccess<()>, AppError> {
    let property_service = PropertyService::new(state.repos.clone());
    property_service
        .block_property_dates(property_id, request.dates, request.reason)
        .await?;

    Ok(ApiSuccess::<()>::new_without_data("Dates blocked successfully"))
}

/// Unblock dates on a property
pub async fn unblock_property_dates(
    State(state): State<AppState>,
    Path(property_id): Path<Uuid>,
    Json(request): Json<UnblockDatesRequest>,
) -> Result<ApiSuccess<()>, AppError> {
    let property_service = PropertyService::new(state.repos.clone());
    property_service
        .unblock_property_dates(property_id, request.dates)
        .await?;

    Ok(ApiSuccess::<()>::new_without_data("Dates unblocked successfully"))
}

/// List a property's blocked dates within a range
pub async fn list_property_blocks(
    State(state): State<AppState>,
    Path(property_id): Path<Uuid>,
    Query(query): Query<BlockedDatesQuery>,
) -> Result<ApiSuccess<Vec<PropertyBlockResponse>>, AppError> {
    let property_service = PropertyService::new(state.repos.clone());
    let blocks = property_service
        .retrieve_blocked_dates(property_id, query.start_date, query.end_date)
        .await?;

    Ok(ApiSuccess::new("Blocked dates retrieved successfully", blocks))
}
