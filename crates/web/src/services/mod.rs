//! Business logic services for the booking site.
//!
//! # Services
//!
//! - `booking` - Hotel listing and the booking lifecycle (check-in, check-out,
//!   date changes, cancellation)

pub mod booking;

pub use booking::{BookingError, BookingService, GuestDetails};
