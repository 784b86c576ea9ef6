use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::config::AppState;
use crate::dto::{BookingResponse, CreateBookingRequest, UpdateBookingRequest};
use crate::interceptors::{ApiSuccess, AppError};
use crate::services::BookingService;

/// Get booking by id
pub async fn get_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
) -> Result<ApiSuccess<BookingResponse>, AppError> {
    let booking_service = BookingService::new(state.repos.clone());
    let booking = booking_service.retrieve_booking(booking_id).await?;

    Ok(ApiSuccess::new("Booking retrieved successfully", booking))
}

/// Create booking
pub async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<ApiSuccess<BookingResponse>, AppError> {
    let booking_service = BookingService::new(state.repos.clone());
    let created = booking_service.create_booking(request).await?;

    Ok(ApiSuccess::new("Booking created successfully", created))
}

/// Update booking dates and guests
pub async fn update_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
    Json(request): Json<UpdateBookingRequest>,
) -> Result<ApiSuccess<BookingResponse>, AppError> {
    let booking_service = BookingService::new(state.repos.clone());
    let updated = booking_service.update_booking(booking_id, request).await?;

    Ok(ApiSuccess::new("Booking updated successfully", updated))
}

/// Cancel booking
pub async fn cancel_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
) -> Result<ApiSuccess<BookingResponse>, AppError> {
    let booking_service = BookingService::new(state.repos.clone());
    let canceled = booking_service.cancel_booking(booking_id).await?;

    Ok(ApiSuccess::new("Booking canceled successfully", canceled))
}

/// Rebook a canceled booking
pub async fn rebook_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
) -> Result<ApiSuccess<BookingResponse>, AppError> {
    let booking_service = BookingService::new(state.repos.clone());
    let rebooked = booking_service.rebook_canceled_booking(booking_id).await?;

    Ok(ApiSuccess::new("Booking rebooked successfully", rebooked))
}

/// Delete booking and its guests
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
) -> Result<ApiSuccess<()>, AppError> {
    let booking_service = BookingService::new(state.repos.clone());
    booking_service.delete_booking(booking_id).await?;

    Ok(ApiSuccess::<()>::new_without_data("Booking deleted successfully"))
}
