use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::dto::{BookingGuestRequest, BookingResponse, CreateBookingRequest, UpdateBookingRequest};
use crate::interceptors::{AppError, AppResult};
use crate::models::{Booking, BookingGuest, BookingStatus};
use crate::repositories::{
    BookingGuestRepository, BookingRepository, PropertyRepository, Repositories, UserRepository,
};
use crate::services::AvailabilityService;
use crate::utils::validate_request;

/// Booking lifecycle: create/update/cancel/rebook/delete, availability
/// enforcement, and pricing.
#[derive(Clone)]
pub struct BookingService {
    users: Arc<dyn UserRepository>,
    properties: Arc<dyn PropertyRepository>,
    bookings: Arc<dyn BookingRepository>,
    guests: Arc<dyn BookingGuestRepository>,
    availability: AvailabilityService,
}

impl BookingService {
    pub fn new(repos: Repositories) -> Self {
        Self {
            availability: AvailabilityService::new(repos.bookings.clone(), repos.blocks.clone()),
            users: repos.users,
            properties: repos.properties,
            bookings: repos.bookings,
            guests: repos.guests,
        }
    }

    /// Get a booking with its guests
    pub async fn retrieve_booking(&self, booking_id: Uuid) -> AppResult<BookingResponse> {
        let booking = self.find_booking(booking_id).await?;
        let guests = self.guests.find_by_booking_id(booking.id).await?;

        Ok(booking.to_response(&guests))
    }

    /// Create a booking in BOOKED state, replacing nothing: the property must
    /// be fully available over the requested range.
    pub async fn create_booking(&self, request: CreateBookingRequest) -> AppResult<BookingResponse> {
        validate_request(&request)?;

        if request.guests.is_empty() {
            return Err(AppError::InvalidArgument(
                "Cannot create booking without guests information".to_string(),
            ));
        }

        check_date_order(request.start_date, request.end_date)?;

        self.users
            .find_by_id(request.user_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No user found with provided user_id {}",
                    request.user_id
                ))
            })?;

        let property = self
            .properties
            .find_by_id(request.property_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No property found with provided property_id {}",
                    request.property_id
                ))
            })?;

        self.check_dates_availability(property.id, request.start_date, request.end_date, None)
            .await?;

        let total_price = calculate_total_price(
            property.price_per_guest,
            request.start_date,
            request.end_date,
            request.guests.len(),
        );

        let booking = Booking::new(
            request.property_id,
            request.user_id,
            request.start_date,
            request.end_date,
            total_price,
        );

        let saved = self.bookings.insert(booking).await?;
        let guests = self.replace_guests(saved.id, request.guests).await?;

        tracing::info!("Created booking {} for property {}", saved.id, saved.property_id);

        Ok(saved.to_response(&guests))
    }

    /// Change dates and guests of an active booking. The booking's own
    /// reservation is excluded from the availability scan, so keeping the
    /// same range never conflicts with itself.
    pub async fn update_booking(
        &self,
        booking_id: Uuid,
        request: UpdateBookingRequest,
    ) -> AppResult<BookingResponse> {
        validate_request(&request)?;

        if request.guests.is_empty() {
            return Err(AppError::InvalidArgument(
                "Cannot update booking without guests information".to_string(),
            ));
        }

        check_date_order(request.start_date, request.end_date)?;

        let mut booking = self.find_booking(booking_id).await?;

        if booking.status == BookingStatus::Canceled {
            return Err(AppError::InvalidState(
                "Cannot update canceled booking".to_string(),
            ));
        }

        let property = self
            .properties
            .find_by_id(booking.property_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No property found with provided property_id {}",
                    booking.property_id
                ))
            })?;

        self.check_dates_availability(
            property.id,
            request.start_date,
            request.end_date,
            Some(booking.id),
        )
        .await?;

        booking.start_date = request.start_date;
        booking.end_date = request.end_date;
        booking.total_price = calculate_total_price(
            property.price_per_guest,
            request.start_date,
            request.end_date,
            request.guests.len(),
        );

        let saved = self.bookings.update(booking).await?;
        let guests = self.replace_guests(saved.id, request.guests).await?;

        Ok(saved.to_response(&guests))
    }

    /// Cancel an active booking, freeing its dates. No availability re-check.
    pub async fn cancel_booking(&self, booking_id: Uuid) -> AppResult<BookingResponse> {
        let mut booking = self.find_booking(booking_id).await?;

        if booking.status == BookingStatus::Canceled {
            return Err(AppError::InvalidState(
                "Cannot cancel an already canceled booking".to_string(),
            ));
        }

        booking.status = BookingStatus::Canceled;

        let saved = self.bookings.update(booking).await?;
        let guests = self.guests.find_by_booking_id(saved.id).await?;

        tracing::info!("Canceled booking {}", saved.id);

        Ok(saved.to_response(&guests))
    }

    /// Bring a canceled booking back to BOOKED, provided its dates are still
    /// free. The canceled booking itself is invisible to the overlap scan.
    pub async fn rebook_canceled_booking(&self, booking_id: Uuid) -> AppResult<BookingResponse> {
        let mut booking = self.find_booking(booking_id).await?;

        if booking.status != BookingStatus::Canceled {
            return Err(AppError::InvalidState(
                "Can only rebook a canceled booking".to_string(),
            ));
        }

        self.check_dates_availability(
            booking.property_id,
            booking.start_date,
            booking.end_date,
            None,
        )
        .await?;

        booking.status = BookingStatus::Booked;

        let saved = self.bookings.update(booking).await?;
        let guests = self.guests.find_by_booking_id(saved.id).await?;

        Ok(saved.to_response(&guests))
    }

    /// Delete a booking and its guests. Idempotent: a non-existent id is a
    /// no-op success.
    pub async fn delete_booking(&self, booking_id: Uuid) -> AppResult<()> {
        self.guests.delete_by_booking_id(booking_id).await?;
        self.bookings.delete_by_id(booking_id).await?;

        Ok(())
    }

    async fn find_booking(&self, booking_id: Uuid) -> AppResult<Booking> {
        self.bookings
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No booking found with id {booking_id}")))
    }

    async fn check_dates_availability(
        &self,
        property_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        exclude_booking: Option<Uuid>,
    ) -> AppResult<()> {
        let unavailable = self
            .availability
            .unavailable_dates(property_id, start_date, end_date, exclude_booking)
            .await?;

        if !unavailable.is_empty() {
            return Err(AppError::dates_conflict(
                "The booking dates contain unavailable dates for the selected property",
                unavailable.into_iter().collect(),
            ));
        }

        Ok(())
    }

    /// Wholesale guest replacement: delete the existing set, insert the new one
    async fn replace_guests(
        &self,
        booking_id: Uuid,
        guests: Vec<BookingGuestRequest>,
    ) -> AppResult<Vec<BookingGuest>> {
        self.guests.delete_by_booking_id(booking_id).await?;

        let to_save = guests
            .into_iter()
            .map(|guest| BookingGuest::new(booking_id, guest.name, guest.date_of_birth))
            .collect();

        self.guests.insert_all(to_save).await
    }
}

fn check_date_order(start_date: NaiveDate, end_date: NaiveDate) -> AppResult<()> {
    if start_date > end_date {
        return Err(AppError::InvalidArgument(
            "start_date cannot be after end_date".to_string(),
        ));
    }

    Ok(())
}

/// Nights are counted inclusive of both ends: a same-day booking is one
/// night-equivalent unit.
fn calculate_total_price(
    price_per_guest: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
    guest_count: usize,
) -> i64 {
    let nights = (end_date - start_date).num_days() + 1;

    price_per_guest * nights * guest_count as i64
}
