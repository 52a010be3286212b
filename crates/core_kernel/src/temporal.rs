//! Calendar date handling
//!
//! Policy records carry plain calendar dates (no time zone). Their canonical
//! string form is ISO 8601 `YYYY-MM-DD`, which is also the form partial-date
//! filters are matched against.

use chrono::NaiveDate;
use thiserror::Error;

/// Canonical date format used for storage and substring matching
pub const CANONICAL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors related to date handling
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Date order violated: {earlier} must not be after {later}")]
    OutOfOrder { earlier: NaiveDate, later: NaiveDate },
}

/// Parses a canonical `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Result<NaiveDate, TemporalError> {
    NaiveDate::parse_from_str(value.trim(), CANONICAL_DATE_FORMAT)
        .map_err(|_| TemporalError::InvalidDate(value.to_string()))
}

/// Renders a date in canonical form
pub fn canonical_date(date: NaiveDate) -> String {
    date.format(CANONICAL_DATE_FORMAT).to_string()
}

/// Long display form, e.g. "January 15, 2024"
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Short display form, e.g. "Jan 15, 2024"
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Ensures `earlier` does not fall after `later`
pub fn ensure_ordered(earlier: NaiveDate, later: NaiveDate) -> Result<(), TemporalError> {
    if earlier > later {
        return Err(TemporalError::OutOfOrder { earlier, later });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_and_render_round_trip() {
        let parsed = parse_date("2024-01-15").unwrap();
        assert_eq!(parsed, date(2024, 1, 15));
        assert_eq!(canonical_date(parsed), "2024-01-15");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(parse_date("15/01/2024"), Err(TemporalError::InvalidDate(_))));
        assert!(parse_date("2024-02-30").is_err());
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(long_date(date(2024, 1, 5)), "January 5, 2024");
        assert_eq!(short_date(date(2024, 1, 15)), "Jan 15, 2024");
    }

    #[test]
    fn test_ensure_ordered() {
        assert!(ensure_ordered(date(2024, 1, 10), date(2024, 1, 15)).is_ok());
        assert!(ensure_ordered(date(2024, 1, 15), date(2024, 1, 15)).is_ok());
        assert!(ensure_ordered(date(2024, 1, 16), date(2024, 1, 15)).is_err());
    }
}
