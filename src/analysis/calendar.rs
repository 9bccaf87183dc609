//! Calendar dates of stored sample timestamps.
//!
//! Stored timestamps are UTC midnight of the day *before* the reading was taken,
//! an off-by-one introduced when the data was collected. The reading's date is the
//! UTC calendar date moved forward by [`DATE_SHIFT_DAYS`]. The local time zone is
//! never consulted.

use crate::analysis::error::SeriesError;
use chrono::{DateTime, Days, NaiveDate};

/// Calendar days added to every stored date.
pub const DATE_SHIFT_DAYS: u64 = 1;

/// UTC calendar date of `timestamp_ms`, shifted forward by [`DATE_SHIFT_DAYS`].
pub fn shifted_date(timestamp_ms: i64) -> Result<NaiveDate, SeriesError> {
    DateTime::from_timestamp_millis(timestamp_ms)
        .map(|instant| instant.date_naive())
        .and_then(|date| date.checked_add_days(Days::new(DATE_SHIFT_DAYS)))
        .ok_or(SeriesError::InvalidTimestamp(timestamp_ms))
}
