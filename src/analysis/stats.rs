//! Summary statistics over a run of temperature samples.
//!
//! Every scan walks the samples in sequence order and only replaces its current
//! candidate on a *strict* improvement, so ties always resolve to the earliest
//! sample. Annotation placement depends on this.
//!
//! The public functions take a validated [`Series`], so every temperature they see
//! is finite and belongs to the same station.

use crate::analysis::error::SeriesError;
use crate::analysis::series::Series;
use crate::types::sample::Sample;

/// Statistics needed to annotate one chart, computed in a single call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStats {
    pub max: f64,
    /// Index of the first sample reaching `max`.
    pub max_index: usize,
    pub min: f64,
    /// Index of the first sample reaching `min`.
    pub min_index: usize,
    /// Mean temperature rounded half-up to a whole degree.
    pub mean: f64,
    /// Index of the earliest sample closest to `mean`.
    pub closest_index: usize,
}

impl SeriesStats {
    /// Computes all statistics for `series`.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::EmptySeries`] if there are no samples, which a
    /// [`Series`] rules out at construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use highs_and_lows::{Sample, Series, SeriesStats};
    ///
    /// let series = Series::new(
    ///     [10.0, 12.0, 8.0]
    ///         .iter()
    ///         .enumerate()
    ///         .map(|(i, t)| Sample::new("USC", i as i64 * 86_400_000, *t))
    ///         .collect(),
    /// )?;
    ///
    /// let stats = SeriesStats::compute(&series)?;
    /// assert_eq!((stats.max, stats.max_index), (12.0, 1));
    /// assert_eq!((stats.min, stats.min_index), (8.0, 2));
    /// assert_eq!(stats.mean, 10.0);
    /// assert_eq!(stats.closest_index, 0);
    /// # Ok::<(), highs_and_lows::SeriesError>(())
    /// ```
    pub fn compute(series: &Series) -> Result<Self, SeriesError> {
        let samples = series.samples();
        let (max_index, max) = max_position(samples)?;
        let (min_index, min) = min_position(samples)?;
        let mean = mean_of(samples)?;
        let closest_index = closest_position(samples, mean)?;

        Ok(Self {
            max,
            max_index,
            min,
            min_index,
            mean,
            closest_index,
        })
    }
}

/// Highest temperature in `series`.
pub fn max_value(series: &Series) -> Result<f64, SeriesError> {
    max_position(series).map(|(_, value)| value)
}

/// Lowest temperature in `series`.
pub fn min_value(series: &Series) -> Result<f64, SeriesError> {
    min_position(series).map(|(_, value)| value)
}

/// Arithmetic mean of all temperatures, rounded half-up (`10.5` becomes `11`,
/// `-10.5` becomes `-10`).
pub fn mean_value(series: &Series) -> Result<f64, SeriesError> {
    mean_of(series)
}

/// The earliest sample whose temperature is nearest to `mean`.
pub fn closest_to_mean(series: &Series, mean: f64) -> Result<&Sample, SeriesError> {
    closest_position(series, mean).map(|index| &series.samples()[index])
}

fn mean_of(samples: &[Sample]) -> Result<f64, SeriesError> {
    if samples.is_empty() {
        return Err(SeriesError::EmptySeries);
    }
    let sum: f64 = temperatures(samples).sum();
    Ok(round_half_up(sum / samples.len() as f64))
}

pub(crate) fn max_position(samples: &[Sample]) -> Result<(usize, f64), SeriesError> {
    first_by(temperatures(samples), |candidate, best| candidate > best)
}

pub(crate) fn min_position(samples: &[Sample]) -> Result<(usize, f64), SeriesError> {
    first_by(temperatures(samples), |candidate, best| candidate < best)
}

pub(crate) fn closest_position(samples: &[Sample], mean: f64) -> Result<usize, SeriesError> {
    let distances = temperatures(samples).map(|t| (t - mean).abs());
    first_by(distances, |candidate, best| candidate < best).map(|(index, _)| index)
}

fn temperatures(samples: &[Sample]) -> impl Iterator<Item = f64> + '_ {
    samples.iter().map(|s| s.temperature_f)
}

fn first_by(
    mut values: impl Iterator<Item = f64>,
    improves: impl Fn(f64, f64) -> bool,
) -> Result<(usize, f64), SeriesError> {
    let mut best = (0, values.next().ok_or(SeriesError::EmptySeries)?);
    for (offset, value) in values.enumerate() {
        if improves(value, best.1) {
            best = (offset + 1, value);
        }
    }
    Ok(best)
}

fn round_half_up(value: f64) -> f64 {
    // Adding 0.5 before flooring would round 0.49999999999999994 up.
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(temps: &[f64]) -> Series {
        let samples = temps
            .iter()
            .enumerate()
            .map(|(i, t)| Sample::new("Culver City", i as i64 * 86_400_000, *t))
            .collect();
        Series::new(samples).unwrap()
    }

    #[test]
    fn test_every_value_within_min_and_max() -> Result<(), Box<dyn std::error::Error>> {
        let data = series(&[61.0, 74.5, 58.0, 90.0, 66.0, 58.0, 90.0]);
        let max = max_value(&data)?;
        let min = min_value(&data)?;
        assert_eq!((min, max), (58.0, 90.0));
        assert!(data
            .iter()
            .all(|s| min <= s.temperature_f && s.temperature_f <= max));
        Ok(())
    }

    #[test]
    fn test_ties_resolve_to_first_occurrence() -> Result<(), Box<dyn std::error::Error>> {
        let data = series(&[70.0, 90.0, 50.0, 90.0, 50.0]);
        assert_eq!(max_position(&data)?, (1, 90.0));
        assert_eq!(min_position(&data)?, (2, 50.0));
        Ok(())
    }

    #[test]
    fn test_closest_to_mean_prefers_earliest() -> Result<(), Box<dyn std::error::Error>> {
        let data = series(&[10.0, 12.0, 8.0]);
        let mean = mean_value(&data)?;
        assert_eq!(mean, 10.0);
        assert_eq!(closest_position(&data, mean)?, 0);
        assert_eq!(closest_to_mean(&data, mean)?.temperature_f, 10.0);
        Ok(())
    }

    #[test]
    fn test_closest_to_mean_equal_distance_keeps_first() -> Result<(), Box<dyn std::error::Error>> {
        // 12 and 8 are both 2 away from 10; the earlier one wins.
        let data = series(&[12.0, 8.0]);
        assert_eq!(closest_position(&data, 10.0)?, 0);
        let data = series(&[20.0, 8.0, 12.0]);
        assert_eq!(closest_position(&data, 10.0)?, 1);
        Ok(())
    }

    #[test]
    fn test_mean_rounds_half_up() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(mean_value(&series(&[10.0, 11.0]))?, 11.0);
        assert_eq!(mean_value(&series(&[10.0, 10.4]))?, 10.0);
        assert_eq!(mean_value(&series(&[-10.0, -11.0]))?, -10.0);
        Ok(())
    }

    #[test]
    fn test_mean_just_below_half_rounds_down() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(mean_value(&series(&[0.49999999999999994]))?, 0.0);
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(-0.49999999999999994), 0.0);
        Ok(())
    }

    #[test]
    fn test_single_sample_series() -> Result<(), Box<dyn std::error::Error>> {
        let data = series(&[70.0]);
        let stats = SeriesStats::compute(&data)?;
        assert_eq!(stats.max, 70.0);
        assert_eq!(stats.min, 70.0);
        assert_eq!(stats.mean, 70.0);
        assert_eq!(data[stats.closest_index].temperature_f, 70.0);
        Ok(())
    }

    #[test]
    fn test_empty_input_fails() {
        let empty: Vec<Sample> = Vec::new();
        assert_eq!(Series::new(empty.clone()), Err(SeriesError::EmptySeries));
        assert_eq!(max_position(&empty), Err(SeriesError::EmptySeries));
        assert_eq!(min_position(&empty), Err(SeriesError::EmptySeries));
        assert_eq!(mean_of(&empty), Err(SeriesError::EmptySeries));
        assert_eq!(closest_position(&empty, 0.0), Err(SeriesError::EmptySeries));
    }
}
