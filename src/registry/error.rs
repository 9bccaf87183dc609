use crate::analysis::error::SeriesError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Dataset index {index} is out of range (registry holds {count} datasets)")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("Failed to read data file '{0}'")]
    DataFileRead(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse samples from '{0}'")]
    DataFileParse(PathBuf, #[source] serde_json::Error),

    #[error("Data file '{0}' does not hold a valid series")]
    InvalidSeries(PathBuf, #[source] SeriesError),
}
