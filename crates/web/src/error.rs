//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server errors to Sentry
//! before responding to the client. All route handlers return `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::services::BookingError;

/// Application-level error type for the booking site.
#[derive(Debug, Error)]
pub enum AppError {
    /// Booking operation failed.
    #[error("Booking error: {0}")]
    Booking(#[from] BookingError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Booking(BookingError::InvalidId(e)) => {
                (StatusCode::BAD_REQUEST, format!("Invalid id: {e}"))
            }
            Self::Booking(BookingError::InvalidDate(e)) => {
                (StatusCode::BAD_REQUEST, format!("Invalid date: {e}"))
            }
            Self::Booking(BookingError::Repository(_)) => {
                // Capture server errors to Sentry
                let event_id = sentry::capture_error(&self);
                tracing::error!(
                    error = %self,
                    sentry_event_id = %event_id,
                    "Request error"
                );

                // Don't expose internal error details to clients
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::to_bytes;
    use hotel_booking_core::{StayDate, types::id::decode_object_id};

    use super::*;
    use crate::db::RepositoryError;

    async fn render(err: BookingError) -> (StatusCode, String) {
        let response = AppError::from(err).into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_invalid_id_is_bad_request() {
        let err = BookingError::InvalidId(decode_object_id("nope").unwrap_err());
        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.starts_with("Invalid id"));
    }

    #[tokio::test]
    async fn test_invalid_date_is_bad_request() {
        let err = BookingError::InvalidDate(StayDate::parse("2024-13-40").unwrap_err());
        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("2024-13-40"));
    }

    #[tokio::test]
    async fn test_store_failure_hides_details() {
        let err = BookingError::Repository(RepositoryError::DataCorruption(
            "booking document has no _id".to_string(),
        ));
        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Internal server error");
    }
}
