pub mod metric;
pub mod sample;
