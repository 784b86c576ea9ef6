pub mod error;
pub mod response;

pub use error::{AppError, AppResult};
pub use response::{ApiError, ApiResponse, ApiSuccess};
