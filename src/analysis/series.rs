//! Contains the validated [`Series`] type: an ordered, non-empty run of samples
//! from a single station.

use crate::analysis::calendar::shifted_date;
use crate::analysis::error::SeriesError;
use crate::types::sample::Sample;
use std::ops::Deref;

/// An ordered, non-empty sequence of [`Sample`]s that all come from one station.
///
/// The order of the input is kept as-is; samples are expected to already be
/// ascending by timestamp and are never re-sorted.
///
/// A `Series` dereferences to `[Sample]`, so the analysis functions in
/// [`crate::analysis::stats`] accept it directly.
///
/// # Errors
///
/// [`Series::new`] rejects input that would make the derived statistics or date
/// labels meaningless:
///
/// * [`SeriesError::EmptySeries`] when no samples are given.
/// * [`SeriesError::MixedStations`] when a sample's station differs from the first one.
/// * [`SeriesError::NonFiniteTemperature`] for `NaN` or infinite readings.
/// * [`SeriesError::InvalidTimestamp`] when a timestamp has no UTC calendar date.
///
/// # Examples
///
/// ```
/// use highs_and_lows::{Sample, Series, SeriesError};
///
/// let series = Series::new(vec![
///     Sample::new("LAX", 1_710_374_400_000, 66.0),
///     Sample::new("LAX", 1_710_460_800_000, 68.0),
/// ])?;
/// assert_eq!(series.station_id(), "LAX");
/// assert_eq!(series.len(), 2);
///
/// assert_eq!(Series::new(vec![]).unwrap_err(), SeriesError::EmptySeries);
/// # Ok::<(), SeriesError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    pub fn new(samples: Vec<Sample>) -> Result<Self, SeriesError> {
        let first = samples.first().ok_or(SeriesError::EmptySeries)?;

        for (position, sample) in samples.iter().enumerate() {
            if sample.station_id != first.station_id {
                return Err(SeriesError::MixedStations {
                    expected: first.station_id.clone(),
                    found: sample.station_id.clone(),
                    position,
                });
            }
            if !sample.temperature_f.is_finite() {
                return Err(SeriesError::NonFiniteTemperature { position });
            }
            shifted_date(sample.timestamp_ms)?;
        }

        Ok(Self { samples })
    }

    /// Station shared by every sample of the series.
    pub fn station_id(&self) -> &str {
        // Non-empty by construction.
        &self.samples[0].station_id
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Temperatures in sample order.
    pub fn temperatures(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.temperature_f).collect()
    }
}

impl Deref for Series {
    type Target = [Sample];

    fn deref(&self) -> &Self::Target {
        &self.samples
    }
}
