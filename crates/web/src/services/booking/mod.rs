//! Booking service.
//!
//! Turns raw request input (path ids, form text) into typed values and
//! performs the one store call each operation needs. Input is parsed before
//! anything is written, so a bad date or id never reaches the store.

mod error;

pub use error::BookingError;

use tracing::{debug, info, instrument};

use hotel_booking_core::{BookingId, HotelId, StayDate};

use crate::db::BookingStore;
use crate::models::{Booking, Hotel, NewBooking};

/// Guest details submitted from the booking form.
#[derive(Debug, Clone, Copy)]
pub struct GuestDetails<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub check_in_date: &'a str,
    pub check_out_date: &'a str,
}

/// Booking service.
///
/// Handles the hotel list, booking creation, check-out, date changes, and
/// cancellation. Mutations on bookings that no longer exist succeed silently.
pub struct BookingService<'a> {
    store: &'a dyn BookingStore,
}

impl<'a> BookingService<'a> {
    /// Create a new booking service.
    #[must_use]
    pub const fn new(store: &'a dyn BookingStore) -> Self {
        Self { store }
    }

    // =========================================================================
    // Hotels
    // =========================================================================

    /// List every hotel.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::Repository` if the store fails.
    #[instrument(skip(self))]
    pub async fn list_hotels(&self) -> Result<Vec<Hotel>, BookingError> {
        Ok(self.store.list_hotels().await?)
    }

    /// Look up a hotel. A missing hotel is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::InvalidId` if `hotel_id` is malformed.
    /// Returns `BookingError::Repository` if the store fails.
    #[instrument(skip(self))]
    pub async fn hotel(&self, hotel_id: &str) -> Result<Option<Hotel>, BookingError> {
        let id = HotelId::parse(hotel_id)?;
        Ok(self.store.get_hotel(id).await?)
    }

    // =========================================================================
    // Bookings
    // =========================================================================

    /// Create a checked-in booking for a hotel.
    ///
    /// The hotel is not looked up first; any well-formed id is accepted.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::InvalidId` if `hotel_id` is malformed.
    /// Returns `BookingError::InvalidDate` if either date is malformed.
    /// Returns `BookingError::Repository` if the store fails.
    #[instrument(skip(self, guest), fields(guest = %guest.name))]
    pub async fn check_in(
        &self,
        hotel_id: &str,
        guest: GuestDetails<'_>,
    ) -> Result<Booking, BookingError> {
        let hotel_id = HotelId::parse(hotel_id)?;
        let check_in_date = StayDate::parse(guest.check_in_date)?;
        let check_out_date = StayDate::parse(guest.check_out_date)?;

        let booking = self
            .store
            .create_booking(NewBooking {
                hotel_id,
                guest_name: guest.name.to_owned(),
                guest_email: guest.email.to_owned(),
                check_in_date,
                check_out_date,
            })
            .await?;

        info!(booking_id = %booking.id, %hotel_id, "Booking created");
        Ok(booking)
    }

    /// Look up a booking. A missing booking is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::InvalidId` if `booking_id` is malformed.
    /// Returns `BookingError::Repository` if the store fails.
    #[instrument(skip(self))]
    pub async fn booking(&self, booking_id: &str) -> Result<Option<Booking>, BookingError> {
        let id = BookingId::parse(booking_id)?;
        Ok(self.store.get_booking(id).await?)
    }

    /// Mark a booking as checked out, whatever its current status.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::InvalidId` if `booking_id` is malformed.
    /// Returns `BookingError::Repository` if the store fails.
    #[instrument(skip(self))]
    pub async fn check_out(&self, booking_id: &str) -> Result<BookingId, BookingError> {
        let id = BookingId::parse(booking_id)?;

        if self.store.check_out(id).await? {
            info!(booking_id = %id, "Booking checked out");
        } else {
            debug!(booking_id = %id, "Check-out matched no booking");
        }

        Ok(id)
    }

    /// Replace both dates of a booking, whatever its current status.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::InvalidId` if `booking_id` is malformed.
    /// Returns `BookingError::InvalidDate` if either date is malformed.
    /// Returns `BookingError::Repository` if the store fails.
    #[instrument(skip(self))]
    pub async fn change_reservation(
        &self,
        booking_id: &str,
        check_in_date: &str,
        check_out_date: &str,
    ) -> Result<BookingId, BookingError> {
        let id = BookingId::parse(booking_id)?;
        let check_in_date = StayDate::parse(check_in_date)?;
        let check_out_date = StayDate::parse(check_out_date)?;

        if self
            .store
            .change_dates(id, check_in_date, check_out_date)
            .await?
        {
            info!(booking_id = %id, %check_in_date, %check_out_date, "Reservation changed");
        } else {
            debug!(booking_id = %id, "Reservation change matched no booking");
        }

        Ok(id)
    }

    /// Delete a booking permanently.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::InvalidId` if `booking_id` is malformed.
    /// Returns `BookingError::Repository` if the store fails.
    #[instrument(skip(self))]
    pub async fn cancel(&self, booking_id: &str) -> Result<(), BookingError> {
        let id = BookingId::parse(booking_id)?;

        if self.store.delete_booking(id).await? {
            info!(booking_id = %id, "Booking cancelled");
        } else {
            debug!(booking_id = %id, "Cancellation matched no booking");
        }

        Ok(())
    }
}
