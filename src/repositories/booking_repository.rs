use async_trait::async_trait;
use chrono::NaiveDate;
#[cfg(test)]
use mockall::automock;
use sqlx::PgPool;
use uuid::Uuid;

use crate::interceptors::AppResult;
use crate::models::Booking;

/// Persistence port for bookings
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booking>>;
    async fn insert(&self, booking: Booking) -> AppResult<Booking>;
    async fn update(&self, booking: Booking) -> AppResult<Booking>;
    /// Deleting a non-existent id is a no-op
    async fn delete_by_id(&self, id: Uuid) -> AppResult<()>;

    /// Non-canceled bookings on the property whose inclusive [start_date,
    /// end_date] range intersects the given one. `exclude_booking` drops one
    /// booking id from the scan so an update does not collide with the row
    /// being updated.
    async fn find_overlapping(
        &self,
        property_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        exclude_booking: Option<Uuid>,
    ) -> AppResult<Vec<Booking>>;
}

#[derive(Clone)]
pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booking>> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(booking)
    }

    async fn insert(&self, booking: Booking) -> AppResult<Booking> {
        let inserted = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (
                 id, property_id, user_id, start_date, end_date,
                 status, total_price, created_at
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING *",
        )
        .bind(booking.id)
        .bind(booking.property_id)
        .bind(booking.user_id)
        .bind(booking.start_date)
        .bind(booking.end_date)
        .bind(booking.status)
        .bind(booking.total_price)
        .bind(booking.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(inserted)
    }

    async fn update(&self, booking: Booking) -> AppResult<Booking> {
        let updated = sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET
                 start_date = $2, end_date = $3, status = $4, total_price = $5
             WHERE id = $1
             RETURNING *",
        )
        .bind(booking.id)
        .bind(booking.start_date)
        .bind(booking.end_date)
        .bind(booking.status)
        .bind(booking.total_price)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete_by_id(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find_overlapping(
        &self,
        property_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        exclude_booking: Option<Uuid>,
    ) -> AppResult<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings
             WHERE property_id = $1
               AND status != 'CANCELED'
               AND start_date <= $3
               AND end_date >= $2
               AND ($4::uuid IS NULL OR id != $4)",
        )
        .bind(property_id)
        .bind(start_date)
        .bind(end_date)
        .bind(exclude_booking)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }
}
