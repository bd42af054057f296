//! Integration tests for the hotel booking site.
//!
//! These tests drive a running server over HTTP. They need:
//! - MongoDB with at least one hotel (`hb-cli seed hotels crates/cli/seed/hotels.yaml`)
//! - The site running (`cargo run -p hotel-booking-web`)
//!
//! Run with:
//!
//! ```bash
//! cargo test -p hotel-booking-integration-tests -- --ignored
//! ```
//!
//! `BOOKING_BASE_URL` overrides the server address (default `http://localhost:5000`).

use reqwest::{Client, Response, header::LOCATION, redirect::Policy};

use hotel_booking_core::{BookingId, HotelId};

/// Base URL for the booking site (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("BOOKING_BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string())
}

/// HTTP client that reports redirects instead of following them.
///
/// # Panics
///
/// Panics if the client cannot be built.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

/// The `Location` header of a redirect response.
#[must_use]
pub fn location(response: &Response) -> Option<String> {
    response
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

/// Pull every hotel id out of the hotel list page, in page order.
#[must_use]
pub fn hotel_ids(home_page: &str) -> Vec<HotelId> {
    home_page
        .match_indices("/book/")
        .filter_map(|(start, marker)| {
            let rest = home_page.get(start + marker.len()..)?;
            HotelId::parse(rest.get(..24)?).ok()
        })
        .collect()
}

/// Extract the booking id from a `/booking_details/{id}` location.
#[must_use]
pub fn booking_id_from_location(location: &str) -> Option<BookingId> {
    location
        .strip_prefix("/booking_details/")
        .and_then(|id| BookingId::parse(id).ok())
}
