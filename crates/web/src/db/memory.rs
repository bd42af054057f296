//! In-process [`BookingStore`] with the same observable semantics as
//! [`super::MongoStore`]: insertion order for listings, `ObjectId`-style ids,
//! silent no-ops on missing bookings.
//!
//! Used by the service and router tests.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use hotel_booking_core::{BookingId, BookingStatus, HotelId, StayDate};

use super::{BookingStore, RepositoryError};
use crate::models::{Booking, Hotel, NewBooking, NewHotel};

/// Booking store kept in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    hotels: RwLock<Vec<Hotel>>,
    bookings: RwLock<Vec<Booking>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a hotel, assigning it a fresh id.
    pub async fn insert_hotel(&self, hotel: NewHotel) -> Hotel {
        let hotel = hotel.with_id(HotelId::from(ObjectId::new()));
        self.hotels.write().await.push(hotel.clone());
        hotel
    }

    /// Number of bookings currently stored.
    pub async fn booking_count(&self) -> usize {
        self.bookings.read().await.len()
    }
}

#[async_trait]
impl BookingStore for MemoryStore {
    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn list_hotels(&self) -> Result<Vec<Hotel>, RepositoryError> {
        Ok(self.hotels.read().await.clone())
    }

    async fn get_hotel(&self, id: HotelId) -> Result<Option<Hotel>, RepositoryError> {
        Ok(self.hotels.read().await.iter().find(|h| h.id == id).cloned())
    }

    async fn create_booking(&self, booking: NewBooking) -> Result<Booking, RepositoryError> {
        let booking = booking.with_id(BookingId::from(ObjectId::new()));
        self.bookings.write().await.push(booking.clone());
        Ok(booking)
    }

    async fn get_booking(&self, id: BookingId) -> Result<Option<Booking>, RepositoryError> {
        Ok(self
            .bookings
            .read()
            .await
            .iter()
            .find(|b| b.id == id)
            .cloned())
    }

    async fn check_out(&self, id: BookingId) -> Result<bool, RepositoryError> {
        let mut bookings = self.bookings.write().await;
        let Some(booking) = bookings.iter_mut().find(|b| b.id == id) else {
            return Ok(false);
        };

        booking.status = BookingStatus::CheckedOut;
        Ok(true)
    }

    async fn change_dates(
        &self,
        id: BookingId,
        check_in_date: StayDate,
        check_out_date: StayDate,
    ) -> Result<bool, RepositoryError> {
        let mut bookings = self.bookings.write().await;
        let Some(booking) = bookings.iter_mut().find(|b| b.id == id) else {
            return Ok(false);
        };

        booking.check_in_date = check_in_date;
        booking.check_out_date = check_out_date;
        Ok(true)
    }

    async fn delete_booking(&self, id: BookingId) -> Result<bool, RepositoryError> {
        let mut bookings = self.bookings.write().await;
        let before = bookings.len();
        bookings.retain(|b| b.id != id);
        Ok(bookings.len() < before)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn new_hotel(name: &str) -> NewHotel {
        NewHotel {
            name: name.to_owned(),
            city: None,
            description: None,
        }
    }

    #[tokio::test]
    async fn test_hotels_keep_insertion_order() {
        let store = MemoryStore::new();
        let first = store.insert_hotel(new_hotel("Alpine Lodge")).await;
        let second = store.insert_hotel(new_hotel("Bayside")).await;

        let hotels = store.list_hotels().await.unwrap();
        assert_eq!(hotels, vec![first.clone(), second]);
        assert_eq!(store.get_hotel(first.id).await.unwrap(), Some(first));
    }

    #[tokio::test]
    async fn test_mutations_on_missing_booking_are_noops() {
        let store = MemoryStore::new();
        let missing = BookingId::from(ObjectId::new());
        let date = StayDate::parse("2024-01-01").unwrap();

        assert!(!store.check_out(missing).await.unwrap());
        assert!(!store.change_dates(missing, date, date).await.unwrap());
        assert!(!store.delete_booking(missing).await.unwrap());
        assert_eq!(store.booking_count().await, 0);
    }
}
