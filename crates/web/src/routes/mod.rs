//! HTTP route handlers for the booking site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                                - Hotel list
//! GET  /health                          - Liveness check
//! GET  /health/ready                    - Readiness check (pings the store)
//!
//! # Hotels
//! GET  /book/{hotel_id}                 - Booking form for a hotel
//!
//! # Bookings
//! POST /check_in/{hotel_id}             - Create a booking (303 to details)
//! GET  /booking_details/{booking_id}    - Booking detail page
//! GET  /check_out/{booking_id}          - Mark checked out (303 to details)
//! POST /change_reservation/{booking_id} - Replace both dates (303 to details)
//! GET  /cancel_booking/{booking_id}     - Delete the booking (303 to /)
//!
//! # Assets
//! GET  /static/*                        - Stylesheet
//! ```

pub mod bookings;
pub mod health;
pub mod hotels;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the hotel routes router.
pub fn hotel_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(hotels::home))
        .route("/book/{hotel_id}", get(hotels::book))
}

/// Create the booking routes router.
pub fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/check_in/{hotel_id}", post(bookings::check_in))
        .route("/booking_details/{booking_id}", get(bookings::details))
        .route("/check_out/{booking_id}", get(bookings::check_out))
        .route(
            "/change_reservation/{booking_id}",
            post(bookings::change_reservation),
        )
        .route("/cancel_booking/{booking_id}", get(bookings::cancel))
}

/// Create all routes for the booking site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .merge(hotel_routes())
        .merge(booking_routes())
}
