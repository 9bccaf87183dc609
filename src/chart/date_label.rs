//! Converts stored sample timestamps into the short `M/D/YY` labels used on the x-axis.
//!
//! Labels show the shifted UTC date from [`shifted_date`], so they are identical on
//! every machine.

use crate::analysis::calendar::shifted_date;
use crate::analysis::error::SeriesError;
use chrono::Datelike;

/// Formats a stored timestamp as a display label: numeric month, numeric day and a
/// two-digit year, without zero padding on month or day.
///
/// # Examples
///
/// ```
/// use highs_and_lows::format_date_label;
///
/// // 2024-03-14T00:00:00Z is displayed as the following day.
/// assert_eq!(format_date_label(1_710_374_400_000)?, "3/15/24");
/// # Ok::<(), highs_and_lows::SeriesError>(())
/// ```
pub fn format_date_label(timestamp_ms: i64) -> Result<String, SeriesError> {
    let date = shifted_date(timestamp_ms)?;
    Ok(format!(
        "{}/{}/{:02}",
        date.month(),
        date.day(),
        date.year().rem_euclid(100)
    ))
}

/// Drops the trailing `/YY` from a label produced by [`format_date_label`],
/// leaving `M/D`.
pub fn short_date_label(label: &str) -> &str {
    label.rsplit_once('/').map_or(label, |(month_day, _)| month_day)
}
