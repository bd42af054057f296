//! Booking service error types.

use thiserror::Error;

use hotel_booking_core::{DateError, IdError};

use crate::db::RepositoryError;

/// Errors that can occur during booking operations.
#[derive(Debug, Error)]
pub enum BookingError {
    /// A hotel or booking id in the URL is not a valid object id.
    #[error("invalid id: {0}")]
    InvalidId(#[from] IdError),

    /// A date field is not a `YYYY-MM-DD` calendar date.
    #[error("invalid date: {0}")]
    InvalidDate(#[from] DateError),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}
