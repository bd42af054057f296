//! Domain models for the booking site.
//!
//! These types represent validated domain objects separate from the stored
//! document shapes in [`crate::db`].

pub mod booking;
pub mod hotel;

pub use booking::{Booking, NewBooking};
pub use hotel::{Hotel, NewHotel};
