//! The in-memory catalog of selectable datasets.

use crate::analysis::series::Series;
use crate::registry::error::RegistryError;
use crate::types::metric::MetricType;

/// One selectable chart source: a series plus how to present it.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetEntry {
    pub series: Series,
    /// Human-readable station name shown on the menu button, e.g. "LAX Airport".
    pub station_label: String,
    pub metric: MetricType,
}

impl DatasetEntry {
    pub fn new(series: Series, station_label: impl Into<String>, metric: MetricType) -> Self {
        Self {
            series,
            station_label: station_label.into(),
            metric,
        }
    }

    /// Menu button text, e.g. "Low Temperature Data for Burbank".
    pub fn button_label(&self) -> String {
        format!(
            "{} Temperature Data for {}",
            self.metric.label(),
            self.station_label
        )
    }
}

/// A fixed, ordered list of datasets.
///
/// Built once at startup and never modified. The order of entries is the display
/// order of the menu and the meaning of a selection index.
///
/// # Examples
///
/// ```
/// use highs_and_lows::{DatasetEntry, DatasetRegistry, MetricType, Sample, Series};
///
/// let series = Series::new(vec![Sample::new("Burbank", 1_710_374_400_000, 71.0)])?;
/// let registry = DatasetRegistry::new(vec![
///     DatasetEntry::new(series, "Burbank", MetricType::High),
/// ]);
///
/// assert_eq!(registry.len(), 1);
/// assert_eq!(registry.get(0)?.station_label, "Burbank");
/// assert!(registry.get(1).is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetRegistry {
    entries: Vec<DatasetEntry>,
}

impl DatasetRegistry {
    pub fn new(entries: Vec<DatasetEntry>) -> Self {
        Self { entries }
    }

    /// Returns the entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::IndexOutOfRange`] if `index >= self.len()`.
    pub fn get(&self, index: usize) -> Result<&DatasetEntry, RegistryError> {
        self.entries
            .get(index)
            .ok_or(RegistryError::IndexOutOfRange {
                index,
                count: self.entries.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DatasetEntry> {
        self.entries.iter()
    }
}
