//! Loads the dataset catalog from a directory of JSON sample files.
//!
//! Each file holds one JSON array of `{ "sId", "time", "tmp" }` records for one
//! station and metric, already ordered by time.

use crate::analysis::series::Series;
use crate::registry::dataset::{DatasetEntry, DatasetRegistry};
use crate::registry::error::RegistryError;
use crate::types::metric::MetricType;
use crate::types::sample::Sample;
use bon::bon;
use log::{info, warn};
use std::path::Path;

/// Where one dataset comes from and how it is labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataSource {
    /// File name without the `.json` extension.
    pub file_stem: &'static str,
    pub station_label: &'static str,
    pub metric: MetricType,
}

impl DataSource {
    pub const fn new(
        file_stem: &'static str,
        station_label: &'static str,
        metric: MetricType,
    ) -> Self {
        Self {
            file_stem,
            station_label,
            metric,
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.file_stem)
    }
}

/// The Los Angeles catalog in menu order: all daily highs, then all daily lows.
pub const LA_STATIONS: [DataSource; 10] = [
    DataSource::new("culver_max", "Culver City", MetricType::High),
    DataSource::new("burbank_max", "Burbank", MetricType::High),
    DataSource::new("lax_max", "LAX Airport", MetricType::High),
    DataSource::new("redondo_max", "Redondo Beach", MetricType::High),
    DataSource::new("usc_max", "USC/Downtown LA", MetricType::High),
    DataSource::new("culver_min", "Culver City", MetricType::Low),
    DataSource::new("burbank_min", "Burbank", MetricType::Low),
    DataSource::new("lax_min", "LAX Airport", MetricType::Low),
    DataSource::new("redondo_min", "Redondo Beach", MetricType::Low),
    DataSource::new("usc_min", "USC/Downtown LA", MetricType::Low),
];

#[bon]
impl DatasetRegistry {
    /// Loads one dataset per source from `dir`, keeping the order of `sources`.
    ///
    /// Sources default to [`LA_STATIONS`].
    ///
    /// # Errors
    ///
    /// * [`RegistryError::DataFileRead`] if a file cannot be read.
    /// * [`RegistryError::DataFileParse`] if a file is not a JSON array of samples.
    /// * [`RegistryError::InvalidSeries`] if the samples do not form a valid series
    ///   (empty, mixed stations, non-finite temperature, unusable timestamp).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use highs_and_lows::{DatasetRegistry, RegistryError};
    /// use std::path::Path;
    ///
    /// let registry = DatasetRegistry::from_dir(Path::new("data")).call()?;
    /// for entry in registry.iter() {
    ///     println!("{}", entry.button_label());
    /// }
    /// # Ok::<(), RegistryError>(())
    /// ```
    #[builder(start_fn = from_dir)]
    pub fn load_from_dir(
        #[builder(start_fn)] dir: &Path,
        sources: Option<&[DataSource]>,
    ) -> Result<DatasetRegistry, RegistryError> {
        let sources = sources.unwrap_or(&LA_STATIONS);
        let entries = sources
            .iter()
            .map(|source| load_entry(dir, source))
            .collect::<Result<Vec<_>, _>>()?;

        info!("Loaded {} datasets from {}", entries.len(), dir.display());
        Ok(DatasetRegistry::new(entries))
    }
}

fn load_entry(dir: &Path, source: &DataSource) -> Result<DatasetEntry, RegistryError> {
    let path = dir.join(source.file_name());
    let bytes = std::fs::read(&path).map_err(|e| RegistryError::DataFileRead(path.clone(), e))?;
    let samples = serde_json::from_slice::<Vec<Sample>>(&bytes)
        .map_err(|e| RegistryError::DataFileParse(path.clone(), e))?;

    let series = Series::new(samples).map_err(|e| {
        warn!("Rejecting {}: {}", path.display(), e);
        RegistryError::InvalidSeries(path.clone(), e)
    })?;

    info!(
        "Loaded {} {} samples for {} from {:?}",
        series.len(),
        source.metric,
        source.station_label,
        path
    );
    Ok(DatasetEntry::new(series, source.station_label, source.metric))
}
