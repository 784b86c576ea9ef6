use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde_json::json;
use thiserror::Error;

use super::response::ApiError;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    InvalidState(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{message}")]
    DatesConflict {
        message: String,
        unavailable_dates: Vec<NaiveDate>,
    },
}

/// Error codes for API responses
#[derive(Debug)]
pub enum ErrorCode {
    DatabaseError,
    ValidationError,
    InvalidArgument,
    InvalidState,
    NotFound,
    DatesConflict,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ErrorCode::InvalidState => "INVALID_STATE",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::DatesConflict => "DATES_CONFLICT",
        }
    }
}

impl AppError {
    /// Build a dates-conflict error. The offending dates are sorted here so
    /// every surfaced payload lists them in calendar order.
    pub fn dates_conflict(message: impl Into<String>, mut unavailable_dates: Vec<NaiveDate>) -> Self {
        unavailable_dates.sort_unstable();
        AppError::DatesConflict {
            message: message.into(),
            unavailable_dates,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::DatabaseError(_) => ErrorCode::DatabaseError,
            AppError::ValidationError(_) => ErrorCode::ValidationError,
            AppError::InvalidArgument(_) => ErrorCode::InvalidArgument,
            AppError::InvalidState(_) => ErrorCode::InvalidState,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::DatesConflict { .. } => ErrorCode::DatesConflict,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidArgument(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidState(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatesConflict { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn to_api_error(&self) -> ApiError {
        let error_code = self.error_code().as_str();
        let message = self.to_string();

        match self {
            AppError::ValidationError(msg) => ApiError::with_details(
                message,
                error_code,
                json!({ "validation_errors": msg }),
            ),
            AppError::DatesConflict {
                unavailable_dates, ..
            } => ApiError::with_details(
                message,
                error_code,
                json!({ "unavailable_dates": unavailable_dates }),
            ),
            _ => ApiError::new(message, error_code),
        }
    }
}

// Implement IntoResponse for AppError
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Application error: {:?}", self);

        let status = self.status_code();
        let api_error = self.to_api_error();
        (status, api_error).into_response()
    }
}

// Result type alias
pub type AppResult<T> = Result<T, AppError>;
