//! Selection state for the chart viewer.
//!
//! The [`Dashboard`] owns the dataset catalog, remembers which dataset is selected
//! and keeps the chart for it. A front-end calls [`Dashboard::select_dataset`] when
//! a menu button is pressed and renders [`Dashboard::chart`].

use crate::chart::builder::build_chart;
use crate::chart::config::ChartConfig;
use crate::chart::spec::ChartSpec;
use crate::error::HighsAndLowsError;
use crate::registry::dataset::DatasetRegistry;
use log::{info, warn};

pub const APP_TITLE: &str = "HighsAndLows";
pub const APP_SUBTITLE: &str = "Los Angeles area temperature data";

/// One menu button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    /// Whether this button's dataset is the one currently charted.
    pub active: bool,
}

/// The currently selected dataset and its chart.
///
/// A failed selection leaves both the selected index and the chart unchanged, so
/// the viewer always holds the last chart that was built successfully.
///
/// # Examples
///
/// ```
/// use highs_and_lows::{
///     ChartConfig, Dashboard, DatasetEntry, DatasetRegistry, MetricType, Sample, Series,
/// };
///
/// let highs = Series::new(vec![Sample::new("Burbank", 1_710_374_400_000, 71.0)])?;
/// let lows = Series::new(vec![Sample::new("Burbank", 1_710_374_400_000, 49.0)])?;
/// let registry = DatasetRegistry::new(vec![
///     DatasetEntry::new(highs, "Burbank", MetricType::High),
///     DatasetEntry::new(lows, "Burbank", MetricType::Low),
/// ]);
///
/// let mut dashboard = Dashboard::new(registry, ChartConfig::default())?;
/// assert_eq!(dashboard.chart().title, "High Temperatures in Burbank");
///
/// dashboard.select_dataset(1)?;
/// assert_eq!(dashboard.chart().title, "Low Temperatures in Burbank");
///
/// assert!(dashboard.select_dataset(7).is_err());
/// assert_eq!(dashboard.selected_index(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Dashboard {
    registry: DatasetRegistry,
    config: ChartConfig,
    selected: usize,
    chart: ChartSpec,
}

impl Dashboard {
    /// Creates a dashboard showing the first dataset of `registry`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RegistryError::IndexOutOfRange`] (wrapped) if the registry is
    /// empty, or a [`crate::SeriesError`] if the first chart cannot be built.
    pub fn new(registry: DatasetRegistry, config: ChartConfig) -> Result<Self, HighsAndLowsError> {
        let entry = registry.get(0)?;
        let chart = build_chart(&entry.series, entry.metric, &config)?;
        Ok(Self {
            registry,
            config,
            selected: 0,
            chart,
        })
    }

    /// Switches to the dataset at `index` and returns its chart.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RegistryError::IndexOutOfRange`] (wrapped) for an unknown
    /// index, or a [`crate::SeriesError`] if the chart cannot be built. In both
    /// cases the previous selection and chart are kept.
    pub fn select_dataset(&mut self, index: usize) -> Result<&ChartSpec, HighsAndLowsError> {
        let chart = self.chart_for(index).inspect_err(|e| {
            warn!(
                "Rejected selection of dataset {}, keeping dataset {}: {}",
                index, self.selected, e
            );
        })?;

        info!("Selected dataset {}: {}", index, chart.title);
        self.selected = index;
        self.chart = chart;
        Ok(&self.chart)
    }

    fn chart_for(&self, index: usize) -> Result<ChartSpec, HighsAndLowsError> {
        let entry = self.registry.get(index)?;
        Ok(build_chart(&entry.series, entry.metric, &self.config)?)
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn chart(&self) -> &ChartSpec {
        &self.chart
    }

    pub fn registry(&self) -> &DatasetRegistry {
        &self.registry
    }

    /// One button per dataset in registry order; only the selected one is active.
    pub fn menu(&self) -> Vec<MenuItem> {
        self.registry
            .iter()
            .enumerate()
            .map(|(index, entry)| MenuItem {
                label: entry.button_label(),
                active: index == self.selected,
            })
            .collect()
    }
}
