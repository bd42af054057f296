//! Calendar dates for a stay.

use core::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Format accepted from forms and used for display.
pub const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors that can occur when parsing a [`StayDate`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The input is not a `YYYY-MM-DD` calendar date.
    #[error("invalid date {input:?}: {reason}")]
    Invalid {
        /// The rejected input.
        input: String,
        /// Why chrono rejected it.
        reason: String,
    },
}

/// A check-in or check-out date.
///
/// Stays are tracked at day granularity. In the store a date is persisted as
/// a UTC timestamp at midnight of that day.
///
/// ## Examples
///
/// ```
/// use hotel_booking_core::StayDate;
///
/// let date = StayDate::parse("2024-01-05").unwrap();
/// assert_eq!(date.to_string(), "2024-01-05");
///
/// assert!(StayDate::parse("2024-13-40").is_err());
/// assert!(StayDate::parse("").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StayDate(NaiveDate);

impl StayDate {
    /// Parse a `YYYY-MM-DD` date.
    ///
    /// # Errors
    ///
    /// Returns `DateError::Invalid` if the text is not a real calendar date.
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, FORM_DATE_FORMAT)
            .map(Self)
            .map_err(|e| DateError::Invalid {
                input: s.to_owned(),
                reason: e.to_string(),
            })
    }

    /// Wrap a chrono date.
    #[must_use]
    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The underlying chrono date.
    #[must_use]
    pub const fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Milliseconds since the Unix epoch at midnight UTC of this date.
    #[must_use]
    pub fn to_utc_midnight_millis(&self) -> i64 {
        self.0.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
    }

    /// The UTC calendar date of a millisecond timestamp.
    ///
    /// Returns `None` if the timestamp is out of chrono's range.
    #[must_use]
    pub fn from_utc_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(|dt| Self(dt.date_naive()))
    }

    /// Number of nights between this date and a later one (negative if earlier).
    #[must_use]
    pub fn nights_until(&self, other: &Self) -> i64 {
        (other.0 - self.0).num_days()
    }
}

impl fmt::Display for StayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORM_DATE_FORMAT))
    }
}

impl From<NaiveDate> for StayDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let date = StayDate::parse("2024-02-29").unwrap();
        assert_eq!(date.as_naive(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert!(StayDate::parse("2023-02-29").is_err());
        assert!(StayDate::parse("2024-13-40").is_err());
    }

    #[test]
    fn test_parse_rejects_other_formats() {
        assert!(StayDate::parse("01/05/2024").is_err());
        assert!(StayDate::parse("2024-01-05T00:00:00").is_err());
        assert!(StayDate::parse("tomorrow").is_err());
    }

    #[test]
    fn test_error_mentions_input() {
        let err = StayDate::parse("2024-13-40").unwrap_err();
        assert!(err.to_string().contains("2024-13-40"));
    }

    #[test]
    fn test_midnight_millis_roundtrip() {
        let date = StayDate::parse("2024-01-01").unwrap();
        assert_eq!(date.to_utc_midnight_millis(), 1_704_067_200_000);
        assert_eq!(StayDate::from_utc_millis(1_704_067_200_000), Some(date));
    }

    #[test]
    fn test_from_millis_drops_time_of_day() {
        // 2024-01-01T23:59:59Z
        let date = StayDate::from_utc_millis(1_704_153_599_000).unwrap();
        assert_eq!(date.to_string(), "2024-01-01");
    }

    #[test]
    fn test_nights_until() {
        let check_in = StayDate::parse("2024-01-01").unwrap();
        let check_out = StayDate::parse("2024-01-05").unwrap();
        assert_eq!(check_in.nights_until(&check_out), 4);
        assert_eq!(check_out.nights_until(&check_in), -4);
    }
}
