pub mod booking_dto;
pub mod property_dto;
pub mod user_dto;

pub use booking_dto::{
    BookingGuestRequest,
    BookingGuestResponse,
    BookingResponse,
    CreateBookingRequest,
    UpdateBookingRequest,
};
pub use property_dto::{
    BlockDatesRequest,
    BlockedDatesQuery,
    PropertyBlockResponse,
    PropertyResponse,
    UnblockDatesRequest,
    UpsertPropertyRequest,
};
pub use user_dto::{UpsertUserRequest, UserResponse};
