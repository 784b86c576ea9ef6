pub mod booking;
pub mod property;
pub mod user;

pub use booking::{Booking, BookingGuest, BookingStatus};
pub use property::{Property, PropertyBlock};
pub use user::User;
