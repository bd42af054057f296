//! Newtype IDs for type-safe document references.
//!
//! Documents in the store are keyed by 12-byte object ids, rendered as
//! 24-character lowercase hex strings in URLs and forms. Use the `define_id!`
//! macro to create type-safe ID wrappers that prevent accidentally mixing IDs
//! from different collections.

use thiserror::Error;

/// Number of raw bytes in an object id.
pub const OBJECT_ID_LEN: usize = 12;

/// Errors that can occur when parsing an id from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    /// The input does not have exactly 24 characters.
    #[error("id must be {expected} hex characters (got {actual})")]
    InvalidLength {
        /// Required number of characters.
        expected: usize,
        /// Number of characters supplied.
        actual: usize,
    },
    /// The input contains characters outside `[0-9a-fA-F]`.
    #[error("id must be hexadecimal: {0}")]
    InvalidHex(String),
}

/// Decode a 24-character hex string into raw object id bytes.
///
/// # Errors
///
/// Returns `IdError` if the input has the wrong length or is not hex.
pub fn decode_object_id(s: &str) -> Result<[u8; OBJECT_ID_LEN], IdError> {
    if s.len() != OBJECT_ID_LEN * 2 {
        return Err(IdError::InvalidLength {
            expected: OBJECT_ID_LEN * 2,
            actual: s.len(),
        });
    }

    let mut bytes = [0_u8; OBJECT_ID_LEN];
    hex::decode_to_slice(s, &mut bytes).map_err(|e| IdError::InvalidHex(e.to_string()))?;
    Ok(bytes)
}

/// Encode raw object id bytes as 24 lowercase hex characters.
#[must_use]
pub fn encode_object_id(bytes: &[u8; OBJECT_ID_LEN]) -> String {
    hex::encode(bytes)
}

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `[u8; 12]` with:
/// - `Serialize`/`Deserialize` as a hex string
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `from_bytes()`, `bytes()`, `parse()`, `to_hex()`
/// - `FromStr` and `Display` using the hex form
/// - `From<ObjectId>` and `Into<ObjectId>` implementations (with `mongodb` feature)
///
/// # Example
///
/// ```rust
/// # use hotel_booking_core::define_id;
/// define_id!(RoomId);
/// define_id!(GuestId);
///
/// let room_id = RoomId::parse("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
/// let guest_id = GuestId::parse("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
///
/// // These are different types, so this won't compile:
/// // let _: RoomId = guest_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name([u8; $crate::types::id::OBJECT_ID_LEN]);

        impl $name {
            /// Create an ID from raw object id bytes.
            #[must_use]
            pub const fn from_bytes(bytes: [u8; $crate::types::id::OBJECT_ID_LEN]) -> Self {
                Self(bytes)
            }

            /// Get the raw object id bytes.
            #[must_use]
            pub const fn bytes(&self) -> [u8; $crate::types::id::OBJECT_ID_LEN] {
                self.0
            }

            /// Parse an ID from its 24-character hex form.
            ///
            /// # Errors
            ///
            /// Returns `IdError` if the input is not a valid object id.
            pub fn parse(s: &str) -> ::core::result::Result<Self, $crate::types::id::IdError> {
                $crate::types::id::decode_object_id(s).map(Self)
            }

            /// Render the ID as lowercase hex.
            #[must_use]
            pub fn to_hex(&self) -> String {
                $crate::types::id::encode_object_id(&self.0)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::types::id::IdError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let s = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Self::parse(&s).map_err(::serde::de::Error::custom)
            }
        }

        #[cfg(feature = "mongodb")]
        impl From<::mongodb::bson::oid::ObjectId> for $name {
            fn from(oid: ::mongodb::bson::oid::ObjectId) -> Self {
                Self(oid.bytes())
            }
        }

        #[cfg(feature = "mongodb")]
        impl From<$name> for ::mongodb::bson::oid::ObjectId {
            fn from(id: $name) -> Self {
                Self::from_bytes(id.0)
            }
        }
    };
}

// Define standard document IDs
define_id!(HotelId);
define_id!(BookingId);
