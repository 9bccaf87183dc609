pub mod builder;
pub mod config;
pub mod date_label;
pub mod spec;
