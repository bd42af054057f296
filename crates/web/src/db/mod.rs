//! Document store operations for the booking site.
//!
//! # Database: `MONGO_DBNAME`
//!
//! ## Collections
//!
//! - `hotels` - Bookable properties (seeded externally, read-only here)
//! - `bookings` - Guest reservations with a `checked_in` / `checked_out` status
//!
//! Handlers never talk to the driver directly: they go through the
//! [`BookingStore`] trait held in [`crate::state::AppState`]. [`MongoStore`]
//! backs it in production, [`MemoryStore`] in tests.
//!
//! # Seeding
//!
//! Hotels are loaded from YAML via:
//! ```bash
//! cargo run -p hotel-booking-cli -- seed hotels hotels.yaml
//! ```

pub mod bookings;
pub mod hotels;
#[cfg(test)]
pub mod memory;
pub mod mongo;

use std::time::Duration;

use async_trait::async_trait;
use mongodb::bson::{self, Document, doc};
use mongodb::options::ClientOptions;
use mongodb::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use thiserror::Error;

use hotel_booking_core::{BookingId, HotelId, StayDate};

use crate::models::{Booking, Hotel, NewBooking};

pub use bookings::BookingRepository;
pub use hotels::HotelRepository;
#[cfg(test)]
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use mongodb::Database;

/// Collection holding hotel documents.
pub const HOTELS_COLLECTION: &str = "hotels";
/// Collection holding booking documents.
pub const BOOKINGS_COLLECTION: &str = "bookings";

/// Application name reported to the MongoDB server.
const APP_NAME: &str = "hotel-booking";

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Error from the MongoDB driver (including lost connectivity).
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// A stored document does not match the expected shape.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// An outgoing record could not be encoded as a BSON document.
    #[error("encoding error: {0}")]
    Encoding(String),
}

/// Encode a record as a BSON document for writing.
///
/// # Errors
///
/// Returns `RepositoryError::Encoding` if `value` does not serialize to a
/// document.
pub(crate) fn encode_document<T: Serialize>(
    value: &T,
    kind: &str,
) -> Result<Document, RepositoryError> {
    bson::to_document(value)
        .map_err(|e| RepositoryError::Encoding(format!("failed to encode {kind}: {e}")))
}

/// Storage operations behind the booking service.
///
/// Every method is a single read or write. Lookups that miss return
/// `Ok(None)`; mutations report whether a document matched and never fail
/// just because it did not.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), RepositoryError>;

    /// All hotels in the store's natural order.
    async fn list_hotels(&self) -> Result<Vec<Hotel>, RepositoryError>;

    /// A single hotel by id.
    async fn get_hotel(&self, id: HotelId) -> Result<Option<Hotel>, RepositoryError>;

    /// Insert a new booking with status `checked_in`.
    async fn create_booking(&self, booking: NewBooking) -> Result<Booking, RepositoryError>;

    /// A single booking by id.
    async fn get_booking(&self, id: BookingId) -> Result<Option<Booking>, RepositoryError>;

    /// Set the status to `checked_out`. Returns `false` if no booking matched.
    async fn check_out(&self, id: BookingId) -> Result<bool, RepositoryError>;

    /// Overwrite both stay dates. Returns `false` if no booking matched.
    async fn change_dates(
        &self,
        id: BookingId,
        check_in_date: StayDate,
        check_out_date: StayDate,
    ) -> Result<bool, RepositoryError>;

    /// Delete a booking. Returns `false` if no booking matched.
    async fn delete_booking(&self, id: BookingId) -> Result<bool, RepositoryError>;
}

/// Create a MongoDB client and select the booking database.
///
/// The driver pools connections internally and connects lazily, so this does
/// not prove the server is reachable; call [`ping`] for that.
///
/// # Arguments
///
/// * `mongo_uri` - MongoDB connection string (wrapped in `SecretString`)
/// * `db_name` - Database holding the `hotels` and `bookings` collections
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the connection string is invalid.
pub async fn connect(mongo_uri: &SecretString, db_name: &str) -> Result<Database, RepositoryError> {
    let mut options = ClientOptions::parse(mongo_uri.expose_secret()).await?;
    options.app_name = Some(APP_NAME.to_owned());
    options.server_selection_timeout = Some(Duration::from_secs(10));

    let client = Client::with_options(options)?;
    Ok(client.database(db_name))
}

/// Round-trip a `ping` command to the server.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the server cannot be reached.
pub async fn ping(db: &Database) -> Result<(), RepositoryError> {
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}
