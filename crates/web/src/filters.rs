//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use chrono::NaiveDate;
use hotel_booking_core::FORM_DATE_FORMAT;

/// Human-readable date format used on pages (e.g., "Mon, Jan 1, 2024").
const LONG_DATE_FORMAT: &str = "%a, %b %-d, %Y";

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Formats a `YYYY-MM-DD` date for display.
///
/// Anything that isn't a form date is passed through unchanged.
///
/// Usage in templates: `{{ booking.check_in_date|long_date }}`
#[askama::filter_fn]
pub fn long_date(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_long_date(&value.to_string()))
}

fn format_long_date(value: &str) -> String {
    NaiveDate::parse_from_str(value, FORM_DATE_FORMAT).map_or_else(
        |_| value.to_owned(),
        |date| date.format(LONG_DATE_FORMAT).to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date("2024-01-01"), "Mon, Jan 1, 2024");
        assert_eq!(format_long_date("2024-02-29"), "Thu, Feb 29, 2024");
    }

    #[test]
    fn test_format_long_date_passthrough() {
        assert_eq!(format_long_date("soon"), "soon");
    }
}
