//! Defines the [`Sample`] record, a single daily temperature reading for one station.

use serde::{Deserialize, Serialize};

/// One daily temperature reading.
///
/// Samples are stored on disk with the short keys of the collection pipeline
/// (`sId`, `time`, `tmp`), which is why the serde names differ from the field names.
///
/// # Examples
///
/// ```
/// use highs_and_lows::Sample;
///
/// let json = r#"{ "sId": "Burbank", "time": 1710374400000, "tmp": 71 }"#;
/// let sample: Sample = serde_json::from_str(json).unwrap();
/// assert_eq!(sample.station_id, "Burbank");
/// assert_eq!(sample.temperature_f, 71.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Identifier of the reporting station, also used in chart titles.
    #[serde(rename = "sId")]
    pub station_id: String,
    /// Milliseconds since the Unix epoch (UTC).
    #[serde(rename = "time")]
    pub timestamp_ms: i64,
    /// Recorded temperature in degrees Fahrenheit.
    #[serde(rename = "tmp")]
    pub temperature_f: f64,
}

impl Sample {
    pub fn new(station_id: impl Into<String>, timestamp_ms: i64, temperature_f: f64) -> Self {
        Self {
            station_id: station_id.into(),
            timestamp_ms,
            temperature_f,
        }
    }
}
