pub mod calendar;
pub mod error;
pub mod series;
pub mod stats;
