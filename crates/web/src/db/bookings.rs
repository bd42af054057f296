//! Booking repository for database operations.
//!
//! Stay dates are persisted as BSON datetimes at midnight UTC. Updates and
//! deletes are single-document operations keyed by `_id`; the driver reports
//! how many documents matched and the repository passes that on as a `bool`.

use mongodb::Database;
use mongodb::bson::{self, DateTime as BsonDateTime, Document, doc, oid::ObjectId};
use serde::{Deserialize, Serialize};

use hotel_booking_core::{BookingId, BookingStatus, HotelId, StayDate};

use super::{BOOKINGS_COLLECTION, RepositoryError, encode_document};
use crate::models::{Booking, NewBooking};

/// Stored shape of a booking.
#[derive(Debug, Serialize, Deserialize)]
struct BookingDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    email: String,
    check_in_date: BsonDateTime,
    check_out_date: BsonDateTime,
    hotel_id: ObjectId,
    status: BookingStatus,
}

impl From<&NewBooking> for BookingDocument {
    fn from(booking: &NewBooking) -> Self {
        Self {
            id: None,
            name: booking.guest_name.clone(),
            email: booking.guest_email.clone(),
            check_in_date: to_bson_date(booking.check_in_date),
            check_out_date: to_bson_date(booking.check_out_date),
            hotel_id: ObjectId::from(booking.hotel_id),
            status: BookingStatus::CheckedIn,
        }
    }
}

fn to_bson_date(date: StayDate) -> BsonDateTime {
    BsonDateTime::from_millis(date.to_utc_midnight_millis())
}

fn from_bson_date(value: BsonDateTime, field: &str) -> Result<StayDate, RepositoryError> {
    StayDate::from_utc_millis(value.timestamp_millis()).ok_or_else(|| {
        RepositoryError::DataCorruption(format!("{field} is out of range: {value}"))
    })
}

/// Decode a raw booking document into the domain type.
fn decode_booking(document: Document) -> Result<Booking, RepositoryError> {
    let stored: BookingDocument = bson::from_document(document)
        .map_err(|e| RepositoryError::DataCorruption(format!("invalid booking document: {e}")))?;

    let id = stored
        .id
        .ok_or_else(|| RepositoryError::DataCorruption("booking document has no _id".to_owned()))?;

    Ok(Booking {
        id: BookingId::from(id),
        hotel_id: HotelId::from(stored.hotel_id),
        guest_name: stored.name,
        guest_email: stored.email,
        check_in_date: from_bson_date(stored.check_in_date, "check_in_date")?,
        check_out_date: from_bson_date(stored.check_out_date, "check_out_date")?,
        status: stored.status,
    })
}

/// Repository for booking database operations.
pub struct BookingRepository<'a> {
    db: &'a Database,
}

impl<'a> BookingRepository<'a> {
    /// Create a new booking repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> mongodb::Collection<Document> {
        self.db.collection(BOOKINGS_COLLECTION)
    }

    /// Insert a new booking with status `checked_in`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    /// Returns `RepositoryError::Encoding` if the booking cannot be encoded.
    /// Returns `RepositoryError::DataCorruption` if the server returns a non-ObjectId `_id`.
    pub async fn create(&self, booking: NewBooking) -> Result<Booking, RepositoryError> {
        let document = encode_document(&BookingDocument::from(&booking), "booking")?;

        let result = self.collection().insert_one(document).await?;
        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            RepositoryError::DataCorruption(format!(
                "inserted booking has unexpected _id: {}",
                result.inserted_id
            ))
        })?;

        Ok(booking.with_id(BookingId::from(id)))
    }

    /// Get a booking by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the document is malformed.
    pub async fn get_by_id(&self, id: BookingId) -> Result<Option<Booking>, RepositoryError> {
        let document = self
            .collection()
            .find_one(doc! { "_id": ObjectId::from(id) })
            .await?;

        document.map(decode_booking).transpose()
    }

    /// Set a booking's status to `checked_out`, whatever it was before.
    ///
    /// # Returns
    ///
    /// Returns `true` if a booking matched, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn check_out(&self, id: BookingId) -> Result<bool, RepositoryError> {
        let result = self
            .collection()
            .update_one(
                doc! { "_id": ObjectId::from(id) },
                doc! { "$set": { "status": BookingStatus::CheckedOut.as_str() } },
            )
            .await?;

        Ok(result.matched_count > 0)
    }

    /// Overwrite both stay dates of a booking.
    ///
    /// # Returns
    ///
    /// Returns `true` if a booking matched, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn change_dates(
        &self,
        id: BookingId,
        check_in_date: StayDate,
        check_out_date: StayDate,
    ) -> Result<bool, RepositoryError> {
        let result = self
            .collection()
            .update_one(
                doc! { "_id": ObjectId::from(id) },
                doc! {
                    "$set": {
                        "check_in_date": to_bson_date(check_in_date),
                        "check_out_date": to_bson_date(check_out_date)
                    }
                },
            )
            .await?;

        Ok(result.matched_count > 0)
    }

    /// Delete a booking.
    ///
    /// # Returns
    ///
    /// Returns `true` if the booking was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: BookingId) -> Result<bool, RepositoryError> {
        let result = self
            .collection()
            .delete_one(doc! { "_id": ObjectId::from(id) })
            .await?;

        Ok(result.deleted_count > 0)
    }
}
