//! demos/chart_json.rs
//!
//! Loads the Los Angeles datasets from a directory of JSON files, selects one of them
//! and prints the resulting chart specification as JSON, ready for a front-end renderer.
//!
//! To run this demo:
//! cargo run --example chart_json -- <data_dir> [dataset_index]

use std::error::Error;
use std::path::PathBuf;

use highs_and_lows::{ChartConfig, Dashboard, DatasetRegistry, APP_SUBTITLE, APP_TITLE};

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let data_dir = PathBuf::from(args.next().unwrap_or_else(|| "data".to_string()));
    let index: usize = match args.next() {
        Some(arg) => arg.parse()?,
        None => 0,
    };

    // 1. Load every dataset once at startup
    let registry = DatasetRegistry::from_dir(&data_dir).call()?;

    // 2. Show the menu
    let mut dashboard = Dashboard::new(registry, ChartConfig::default())?;
    dashboard.select_dataset(index)?;
    eprintln!("{APP_TITLE}: {APP_SUBTITLE}");
    for item in dashboard.menu() {
        eprintln!("{} {}", if item.active { "*" } else { " " }, item.label);
    }

    // 3. Hand the chart to the renderer
    println!("{}", dashboard.chart().to_json()?);
    Ok(())
}
