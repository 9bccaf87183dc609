//! Defines [`MetricType`], which distinguishes daily-high from daily-low series.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// Which daily extreme a series records.
///
/// The metric drives all wording on a chart ("High"/"Low") and selects the
/// fixed y-axis range.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricType {
    /// Daily maximum temperatures.
    High,
    /// Daily minimum temperatures.
    Low,
}

impl MetricType {
    /// Capitalized word used in titles, annotations and trace names.
    pub fn label(self) -> &'static str {
        match self {
            MetricType::High => "High",
            MetricType::Low => "Low",
        }
    }
}

impl Display for MetricType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MetricType::High => write!(f, "high"),
            MetricType::Low => write!(f, "low"),
        }
    }
}
