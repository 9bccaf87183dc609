//! Presentation policy for generated charts.
//!
//! The y-axis ranges and tick stride are fixed display choices and are not
//! derived from the data. They live here so they can be revisited without
//! touching the analysis code.

use crate::types::metric::MetricType;
use bon::Builder;

/// Fixed y-axis range for daily-high charts, in °F.
pub const HIGH_Y_RANGE: (f64, f64) = (28.0, 128.0);
/// Fixed y-axis range for daily-low charts, in °F.
pub const LOW_Y_RANGE: (f64, f64) = (5.0, 95.0);
/// An x-axis tick label is shown every this many samples. With daily samples this
/// approximates one tick per month, but it does not follow calendar month boundaries.
pub const TICK_STRIDE: usize = 30;
/// Display width in pixels.
pub const CHART_WIDTH: u32 = 1250;
/// Display height in pixels.
pub const CHART_HEIGHT: u32 = 400;

/// Layout settings used by [`crate::build_chart`].
///
/// Use [`ChartConfig::default()`] for the standard look, or the builder to override
/// single values.
///
/// # Examples
///
/// ```
/// use highs_and_lows::{ChartConfig, MetricType, TICK_STRIDE};
///
/// let config = ChartConfig::builder().tick_stride(7).build();
/// assert_eq!(config.tick_stride, 7);
/// assert_eq!(config.y_axis_range(MetricType::High), (28.0, 128.0));
///
/// assert_eq!(ChartConfig::default().tick_stride, TICK_STRIDE);
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct ChartConfig {
    #[builder(default = HIGH_Y_RANGE)]
    pub high_y_range: (f64, f64),
    #[builder(default = LOW_Y_RANGE)]
    pub low_y_range: (f64, f64),
    /// Must be at least 1; a stride of 0 is treated as 1.
    #[builder(default = TICK_STRIDE)]
    pub tick_stride: usize,
    #[builder(default = CHART_WIDTH)]
    pub width: u32,
    #[builder(default = CHART_HEIGHT)]
    pub height: u32,
}

impl ChartConfig {
    /// The y-axis range for charts of `metric`.
    pub fn y_axis_range(&self, metric: MetricType) -> (f64, f64) {
        match metric {
            MetricType::High => self.high_y_range,
            MetricType::Low => self.low_y_range,
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig::builder().build()
    }
}
