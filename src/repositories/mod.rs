pub mod booking_guest_repository;
pub mod booking_repository;
pub mod property_block_repository;
pub mod property_repository;
pub mod user_repository;

use std::sync::Arc;

use sqlx::PgPool;

pub use booking_guest_repository::{BookingGuestRepository, PgBookingGuestRepository};
pub use booking_repository::{BookingRepository, PgBookingRepository};
pub use property_block_repository::{PgPropertyBlockRepository, PropertyBlockRepository};
pub use property_repository::{PgPropertyRepository, PropertyRepository};
pub use user_repository::{PgUserRepository, UserRepository};

#[cfg(test)]
pub use booking_guest_repository::MockBookingGuestRepository;
#[cfg(test)]
pub use booking_repository::MockBookingRepository;
#[cfg(test)]
pub use property_block_repository::MockPropertyBlockRepository;
#[cfg(test)]
pub use property_repository::MockPropertyRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;

/// The full set of persistence ports the services are wired with. Services
/// stay stateless; everything they touch goes through these.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub properties: Arc<dyn PropertyRepository>,
    pub bookings: Arc<dyn BookingRepository>,
    pub guests: Arc<dyn BookingGuestRepository>,
    pub blocks: Arc<dyn PropertyBlockRepository>,
}

impl Repositories {
    /// Wire every port to its Postgres implementation over a shared pool
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(pool.clone())),
            properties: Arc::new(PgPropertyRepository::new(pool.clone())),
            bookings: Arc::new(PgBookingRepository::new(pool.clone())),
            guests: Arc::new(PgBookingGuestRepository::new(pool.clone())),
            blocks: Arc::new(PgPropertyBlockRepository::new(pool)),
        }
    }
}
