use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use sqlx::PgPool;
use uuid::Uuid;

use crate::interceptors::AppResult;
use crate::models::BookingGuest;

/// Persistence port for booking guests. Guests are always replaced as a whole
/// set: delete-by-booking followed by insert-all.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BookingGuestRepository: Send + Sync {
    async fn find_by_booking_id(&self, booking_id: Uuid) -> AppResult<Vec<BookingGuest>>;
    async fn delete_by_booking_id(&self, booking_id: Uuid) -> AppResult<()>;
    async fn insert_all(&self, guests: Vec<BookingGuest>) -> AppResult<Vec<BookingGuest>>;
}

#[derive(Clone)]
pub struct PgBookingGuestRepository {
    pool: PgPool,
}

impl PgBookingGuestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingGuestRepository for PgBookingGuestRepository {
    async fn find_by_booking_id(&self, booking_id: Uuid) -> AppResult<Vec<BookingGuest>> {
        let guests = sqlx::query_as::<_, BookingGuest>(
            "SELECT * FROM booking_guests WHERE booking_id = $1",
        )
        .bind(booking_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(guests)
    }

    async fn delete_by_booking_id(&self, booking_id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM booking_guests WHERE booking_id = $1")
            .bind(booking_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn insert_all(&self, guests: Vec<BookingGuest>) -> AppResult<Vec<BookingGuest>> {
        let mut inserted = Vec::with_capacity(guests.len());

        for guest in guests {
            let saved = sqlx::query_as::<_, BookingGuest>(
                "INSERT INTO booking_guests (id, booking_id, name, date_of_birth)
                 VALUES ($1, $2, $3, $4)
                 RETURNING *",
            )
            .bind(guest.id)
            .bind(guest.booking_id)
            .bind(&guest.name)
            .bind(guest.date_of_birth)
            .fetch_one(&self.pool)
            .await?;

            inserted.push(saved);
        }

        Ok(inserted)
    }
}
