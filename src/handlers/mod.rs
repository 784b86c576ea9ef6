pub mod booking_handler;
pub mod health_handler;
pub mod property_handler;
pub mod user_handler;

pub use booking_handler::{
    cancel_booking, create_booking, delete_booking, get_booking, rebook_booking, update_booking,
};
pub use health_handler::health_check;
pub use property_handler::{
    block_property_dates, create_property, delete_property, get_property, list_property_blocks,
    unblock_property_dates, update_property,
};
pub use user_handler::{create_user, delete_user, get_user, update_user};
