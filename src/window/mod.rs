//! Conversion of calendar dates into an inclusive UTC epoch-second window.

use crate::utils::config::{DEFAULT_WINDOW_DAYS, END_OF_DAY_OFFSET};
use crate::utils::error::WindowError;
use chrono::{Duration, NaiveDate};
use log::debug;

/// Inclusive `[start, end]` range of epoch seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: i64,
    pub end: i64,
}

impl TimeWindow {
    /// Build the window covering `start_date` 00:00:00 through `end_date` 23:59:59 UTC
    ///
    /// # Errors
    /// * `WindowError::InvalidFormat` / `InvalidDate` - either date is malformed
    /// * `WindowError::InvalidRange` - the window is empty or inverted
    pub fn from_dates(start_date: &str, end_date: &str) -> Result<Self, WindowError> {
        let start = parse_date(start_date)?;
        let end = parse_date(end_date)? + END_OF_DAY_OFFSET;

        if start >= end {
            return Err(WindowError::InvalidRange { start, end });
        }

        debug!("Time window: {} ..= {}", start, end);

        Ok(Self { start, end })
    }

    /// Whether `timestamp` falls inside the window (both ends inclusive)
    pub fn contains(&self, timestamp: i64) -> bool {
        timestamp >= self.start && timestamp <= self.end
    }
}

/// Parse a `YYYY-MM-DD` date into the epoch second of its UTC midnight
///
/// **Public** - used by the window builder and by tests
///
/// # Errors
/// * `WindowError::InvalidFormat` - not three integer parts separated by `-`
/// * `WindowError::InvalidDate` - the calendar date does not exist
pub fn parse_date(date: &str) -> Result<i64, WindowError> {
    let parts: Vec<&str> = date.split('-').collect();

    if parts.len() != 3 {
        return Err(WindowError::InvalidFormat(date.to_string()));
    }

    let invalid_format = || WindowError::InvalidFormat(date.to_string());
    let year: i32 = parts[0].trim().parse().map_err(|_| invalid_format())?;
    let month: u32 = parts[1].trim().parse().map_err(|_| invalid_format())?;
    let day: u32 = parts[2].trim().parse().map_err(|_| invalid_format())?;

    // from_ymd_opt rejects out-of-range fields instead of rolling them over
    let midnight = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| WindowError::InvalidDate(date.to_string()))?;

    Ok(midnight.and_utc().timestamp())
}

/// Default `(start, end)` dates: the last `DEFAULT_WINDOW_DAYS` days up to `today`
pub fn default_dates(today: NaiveDate) -> (String, String) {
    let start = today - Duration::days(DEFAULT_WINDOW_DAYS);
    (
        start.format("%Y-%m-%d").to_string(),
        today.format("%Y-%m-%d").to_string(),
    )
}
