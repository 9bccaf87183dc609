use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SeriesError {
    #[error("Cannot analyze an empty series")]
    EmptySeries,

    #[error("Sample {position} belongs to station '{found}', expected '{expected}'")]
    MixedStations {
        expected: String,
        found: String,
        position: usize,
    },

    #[error("Sample {position} has a non-finite temperature")]
    NonFiniteTemperature { position: usize },

    #[error("Timestamp {0} ms cannot be represented as a UTC date")]
    InvalidTimestamp(i64),
}
