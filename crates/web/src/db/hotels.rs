//! Hotel repository for database operations.
//!
//! Hotel documents are read as raw BSON and decoded here, so a document that
//! is missing `name` (or has the wrong types) surfaces as
//! `RepositoryError::DataCorruption` instead of a half-filled page.

use futures::TryStreamExt;
use mongodb::Database;
use mongodb::bson::{self, Document, doc, oid::ObjectId};
use serde::{Deserialize, Serialize};

use hotel_booking_core::HotelId;

use super::{HOTELS_COLLECTION, RepositoryError, encode_document};
use crate::models::{Hotel, NewHotel};

/// Stored shape of a hotel.
#[derive(Debug, Serialize, Deserialize)]
struct HotelDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl From<NewHotel> for HotelDocument {
    fn from(hotel: NewHotel) -> Self {
        Self {
            id: None,
            name: hotel.name,
            city: hotel.city,
            description: hotel.description,
        }
    }
}

/// Decode a raw hotel document into the domain type.
fn decode_hotel(document: Document) -> Result<Hotel, RepositoryError> {
    let stored: HotelDocument = bson::from_document(document)
        .map_err(|e| RepositoryError::DataCorruption(format!("invalid hotel document: {e}")))?;

    let id = stored
        .id
        .ok_or_else(|| RepositoryError::DataCorruption("hotel document has no _id".to_owned()))?;

    Ok(Hotel {
        id: HotelId::from(id),
        name: stored.name,
        city: stored.city,
        description: stored.description,
    })
}

/// Repository for hotel database operations.
pub struct HotelRepository<'a> {
    db: &'a Database,
}

impl<'a> HotelRepository<'a> {
    /// Create a new hotel repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> mongodb::Collection<Document> {
        self.db.collection(HOTELS_COLLECTION)
    }

    /// Get every hotel, in the collection's natural order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if any document is malformed.
    pub async fn list(&self) -> Result<Vec<Hotel>, RepositoryError> {
        let documents: Vec<Document> = self.collection().find(doc! {}).await?.try_collect().await?;

        documents.into_iter().map(decode_hotel).collect()
    }

    /// Get a hotel by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the document is malformed.
    pub async fn get_by_id(&self, id: HotelId) -> Result<Option<Hotel>, RepositoryError> {
        let document = self
            .collection()
            .find_one(doc! { "_id": ObjectId::from(id) })
            .await?;

        document.map(decode_hotel).transpose()
    }

    /// Insert several hotels at once.
    ///
    /// # Returns
    ///
    /// Returns the number of hotels inserted.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    /// Returns `RepositoryError::Encoding` if a hotel cannot be encoded.
    pub async fn insert_many(&self, hotels: Vec<NewHotel>) -> Result<usize, RepositoryError> {
        if hotels.is_empty() {
            return Ok(0);
        }

        let documents = hotels
            .into_iter()
            .map(|hotel| encode_document(&HotelDocument::from(hotel), "hotel"))
            .collect::<Result<Vec<_>, _>>()?;

        let result = self.collection().insert_many(documents).await?;
        Ok(result.inserted_ids.len())
    }

    /// Delete every hotel.
    ///
    /// # Returns
    ///
    /// Returns the number of hotels deleted.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let result = self.collection().delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }
}
