//! MongoDB-backed [`BookingStore`].

use async_trait::async_trait;
use mongodb::Database;

use hotel_booking_core::{BookingId, HotelId, StayDate};

use super::{BookingRepository, BookingStore, HotelRepository, RepositoryError};
use crate::models::{Booking, Hotel, NewBooking};

/// Booking store over a MongoDB database.
///
/// Cheap to clone: `Database` shares the driver's connection pool.
#[derive(Clone, Debug)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Wrap an already-selected database.
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookingStore for MongoStore {
    async fn ping(&self) -> Result<(), RepositoryError> {
        super::ping(&self.db).await
    }

    async fn list_hotels(&self) -> Result<Vec<Hotel>, RepositoryError> {
        HotelRepository::new(&self.db).list().await
    }

    async fn get_hotel(&self, id: HotelId) -> Result<Option<Hotel>, RepositoryError> {
        HotelRepository::new(&self.db).get_by_id(id).await
    }

    async fn create_booking(&self, booking: NewBooking) -> Result<Booking, RepositoryError> {
        BookingRepository::new(&self.db).create(booking).await
    }

    async fn get_booking(&self, id: BookingId) -> Result<Option<Booking>, RepositoryError> {
        BookingRepository::new(&self.db).get_by_id(id).await
    }

    async fn check_out(&self, id: BookingId) -> Result<bool, RepositoryError> {
        BookingRepository::new(&self.db).check_out(id).await
    }

    async fn change_dates(
        &self,
        id: BookingId,
        check_in_date: StayDate,
        check_out_date: StayDate,
    ) -> Result<bool, RepositoryError> {
        BookingRepository::new(&self.db)
            .change_dates(id, check_in_date, check_out_date)
            .await
    }

    async fn delete_booking(&self, id: BookingId) -> Result<bool, RepositoryError> {
        BookingRepository::new(&self.db).delete(id).await
    }
}
