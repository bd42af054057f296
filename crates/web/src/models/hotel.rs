//! Hotel domain types.

use serde::Deserialize;

use hotel_booking_core::HotelId;

/// A bookable property (domain type).
///
/// Hotels are managed outside the web app; the site only reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    /// Unique hotel ID.
    pub id: HotelId,
    /// Display name.
    pub name: String,
    /// City the hotel is in, if recorded.
    pub city: Option<String>,
    /// Free-form description, if recorded.
    pub description: Option<String>,
}

/// A hotel to be inserted by the seeding tools.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewHotel {
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewHotel {
    /// Attach a store-assigned id.
    #[must_use]
    pub fn with_id(self, id: HotelId) -> Hotel {
        Hotel {
            id,
            name: self.name,
            city: self.city,
            description: self.description,
        }
    }
}
