//! demos/plot_chart.rs
//!
//! Builds the chart for one Los Angeles dataset and draws its four lines with
//! `plotlars` in the browser.
//!
//! To run this demo:
//! cargo run --example plot_chart --features examples -- <data_dir> [dataset_index]

use std::error::Error;
use std::path::PathBuf;

use highs_and_lows::{build_chart, ChartConfig, ChartSpec, DatasetRegistry};
use plotlars::{Axis, Legend, Line, Plot, Rgb, Shape, Text, TimeSeriesPlot};
use polars::prelude::*;

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let data_dir = PathBuf::from(args.next().unwrap_or_else(|| "data".to_string()));
    let index: usize = match args.next() {
        Some(arg) => arg.parse()?,
        None => 0,
    };

    // 1. Load the catalog and pick a dataset
    let registry = DatasetRegistry::from_dir(&data_dir).call()?;
    let entry = registry.get(index)?;

    // 2. Build the chart specification
    let chart = build_chart(&entry.series, entry.metric, &ChartConfig::default())?;

    // 3. Plot it
    println!("Generating plot for {}...", chart.title);
    plot(&chart)?;
    println!("Plot shown in browser.");

    Ok(())
}

/// Plots the recorded series together with its max, min and mean reference lines.
fn plot(chart: &ChartSpec) -> Result<(), PolarsError> {
    let data = df!(
        "date" => &chart.x_labels,
        "recorded" => &chart.traces[0].y,
        "max" => &chart.traces[1].y,
        "min" => &chart.traces[2].y,
        "mean" => &chart.traces[3].y,
    )?;

    TimeSeriesPlot::builder()
        .data(&data)
        .x("date")
        .y("recorded")
        .additional_series(vec!["max", "min", "mean"])
        .size(4)
        .colors(vec![
            Rgb(0, 0, 0),
            Rgb(255, 0, 0),
            Rgb(0, 0, 255),
            Rgb(128, 0, 128),
        ])
        .lines(vec![Line::Solid, Line::Solid, Line::Solid, Line::Dash])
        .with_shape(true)
        .shapes(vec![Shape::Circle])
        .plot_title(Text::from(chart.title.as_str()).font("Roboto mono").size(18))
        .legend(&Legend::new().x(0.05).y(0.9))
        .x_title("Date")
        .y_title(Text::from(chart.layout.y_axis_title).color(Rgb(106, 75, 62)))
        .y_axis(
            &Axis::new()
                .value_color(Rgb(106, 75, 62))
                .show_grid(false)
                .zero_line_color(Rgb(0, 0, 0)),
        )
        .build()
        .plot();

    Ok(())
}
