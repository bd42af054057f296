//! Booking status.

use serde::{Deserialize, Serialize};

/// Where a guest is in their stay.
///
/// Stored as `"checked_in"` / `"checked_out"`. There is no cancelled state:
/// cancelling a booking deletes it. Any status may move to any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Initial status of every new booking.
    #[default]
    CheckedIn,
    CheckedOut,
}

impl BookingStatus {
    /// The stored string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CheckedIn => "checked_in",
            Self::CheckedOut => "checked_out",
        }
    }

    /// Human-readable label for pages.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::CheckedIn => "Checked in",
            Self::CheckedOut => "Checked out",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "checked_in" => Ok(Self::CheckedIn),
            "checked_out" => Ok(Self::CheckedOut),
            _ => Err(format!("invalid booking status: {s}")),
        }
    }
}
