mod analysis;
mod chart;
mod dashboard;
mod error;
mod registry;
mod types;

pub use error::HighsAndLowsError;

pub use types::metric::MetricType;
pub use types::sample::Sample;

pub use analysis::calendar::{shifted_date, DATE_SHIFT_DAYS};
pub use analysis::error::SeriesError;
pub use analysis::series::Series;
pub use analysis::stats::{closest_to_mean, max_value, mean_value, min_value, SeriesStats};

pub use chart::builder::build_chart;
pub use chart::config::*;
pub use chart::date_label::{format_date_label, short_date_label};
pub use chart::spec::*;

pub use registry::dataset::{DatasetEntry, DatasetRegistry};
pub use registry::error::RegistryError;
pub use registry::loader::{DataSource, LA_STATIONS};

pub use dashboard::{Dashboard, MenuItem, APP_SUBTITLE, APP_TITLE};
