pub mod availability;
pub mod booking_service;
pub mod property_service;
pub mod user_service;

pub use availability::AvailabilityService;
pub use booking_service::BookingService;
pub use property_service::PropertyService;
pub use user_service::UserService;
