//! Booking domain types.

use hotel_booking_core::{BookingId, BookingStatus, HotelId, StayDate};

/// A reservation linking a guest to a hotel and a date range (domain type).
///
/// Nothing ties `check_out_date` to `check_in_date`, and `hotel_id` is not
/// checked against the hotels collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    /// Store-assigned booking ID.
    pub id: BookingId,
    /// Hotel the booking is for.
    pub hotel_id: HotelId,
    /// Guest name as entered.
    pub guest_name: String,
    /// Guest email as entered.
    pub guest_email: String,
    /// First night of the stay.
    pub check_in_date: StayDate,
    /// Departure day.
    pub check_out_date: StayDate,
    /// Where the guest is in their stay.
    pub status: BookingStatus,
}

/// A booking that has not been stored yet.
///
/// New bookings always start as [`BookingStatus::CheckedIn`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub hotel_id: HotelId,
    pub guest_name: String,
    pub guest_email: String,
    pub check_in_date: StayDate,
    pub check_out_date: StayDate,
}

impl NewBooking {
    /// Attach a store-assigned id, producing a checked-in booking.
    #[must_use]
    pub fn with_id(self, id: BookingId) -> Booking {
        Booking {
            id,
            hotel_id: self.hotel_id,
            guest_name: self.guest_name,
            guest_email: self.guest_email,
            check_in_date: self.check_in_date,
            check_out_date: self.check_out_date,
            status: BookingStatus::CheckedIn,
        }
    }
}
