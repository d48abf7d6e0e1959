//! Utility functions and helpers.

pub mod http;

use chrono::{NaiveDate, Utc};

use crate::error::{AppError, Result};

/// Today's calendar date in UTC.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| AppError::validation(format!("invalid date '{s}' (expected YYYY-MM-DD): {e}")))
}
