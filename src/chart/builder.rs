//! Turns one temperature series into a [`ChartSpec`].

use crate::analysis::error::SeriesError;
use crate::analysis::series::Series;
use crate::analysis::stats::SeriesStats;
use crate::chart::config::ChartConfig;
use crate::chart::date_label::{format_date_label, short_date_label};
use crate::chart::spec::{
    Annotation, AnnotationKind, ArrowStyle, ChartSpec, Layout, LineDash, LineStyle,
    MarkerStyle, Tick, Trace, TraceMode, XAxis, ANNOTATION_FONT_SIZE, FONT_COLOR, FONT_FAMILY,
    PAPER_BACKGROUND, PLOT_BACKGROUND, X_AXIS_NTICKS, X_AXIS_TICK_ANGLE, X_AXIS_TITLE,
    Y_AXIS_TITLE,
};
use crate::types::metric::MetricType;
use log::debug;

const RECORDED_COLOR: &str = "black";
const MAX_COLOR: &str = "red";
const MIN_COLOR: &str = "blue";
const MEAN_COLOR: &str = "purple";

/// Builds the complete chart description for `series`, keeping sample order.
///
/// Only a validated [`Series`] is accepted, so empty input, mixed stations and
/// non-finite temperatures are rejected before a chart can be built.
///
/// # Errors
///
/// Returns a [`SeriesError`] if a statistic or date label cannot be derived. No
/// partial chart is produced.
///
/// # Examples
///
/// ```
/// use highs_and_lows::{build_chart, ChartConfig, MetricType, Sample, Series};
///
/// let series = Series::new(vec![
///     Sample::new("Redondo Beach", 1_710_374_400_000, 64.0),
///     Sample::new("Redondo Beach", 1_710_460_800_000, 69.0),
/// ])?;
///
/// let chart = build_chart(&series, MetricType::High, &ChartConfig::default())?;
/// assert_eq!(chart.title, "High Temperatures in Redondo Beach");
/// assert_eq!(chart.x_labels, vec!["3/15/24", "3/16/24"]);
/// assert_eq!(chart.y_axis_range, (28.0, 128.0));
/// # Ok::<(), highs_and_lows::SeriesError>(())
/// ```
pub fn build_chart(
    series: &Series,
    metric: MetricType,
    config: &ChartConfig,
) -> Result<ChartSpec, SeriesError> {
    let samples = series.samples();
    let stats = SeriesStats::compute(series)?;

    let x_labels = samples
        .iter()
        .map(|s| format_date_label(s.timestamp_ms))
        .collect::<Result<Vec<_>, _>>()?;
    let y_values: Vec<f64> = samples.iter().map(|s| s.temperature_f).collect();

    let traces = build_traces(&y_values, &stats, metric);
    let annotations = build_annotations(&x_labels, &stats, metric);
    let x_axis = build_x_axis(&x_labels, config.tick_stride);

    debug!(
        "Built {} chart for {} with {} samples (max {}, min {}, mean {})",
        metric,
        series.station_id(),
        samples.len(),
        stats.max,
        stats.min,
        stats.mean
    );

    Ok(ChartSpec {
        title: format!("{} Temperatures in {}", metric.label(), series.station_id()),
        metric,
        closest_to_mean: samples[stats.closest_index].clone(),
        max_value: stats.max,
        min_value: stats.min,
        mean_value: stats.mean,
        y_axis_range: config.y_axis_range(metric),
        x_labels,
        y_values,
        traces,
        annotations,
        x_axis,
        layout: Layout {
            width: config.width,
            height: config.height,
            y_axis_title: Y_AXIS_TITLE,
            plot_background: PLOT_BACKGROUND,
            paper_background: PAPER_BACKGROUND,
            font_family: FONT_FAMILY,
            font_color: FONT_COLOR,
        },
    })
}

fn build_traces(y_values: &[f64], stats: &SeriesStats, metric: MetricType) -> Vec<Trace> {
    let label = metric.label();
    let constant = |value: f64| vec![value; y_values.len()];
    let line = |color: &'static str, dash: LineDash| LineStyle {
        width: 1.0,
        color,
        dash,
    };

    vec![
        Trace {
            name: format!("Recorded {label} Temperature"),
            y: y_values.to_vec(),
            mode: TraceMode::LinesMarkers,
            line: line(RECORDED_COLOR, LineDash::Solid),
            marker: Some(MarkerStyle {
                size: 4.0,
                color: RECORDED_COLOR,
            }),
        },
        Trace {
            name: format!("Yearly Maximum {label} Temp"),
            y: constant(stats.max),
            mode: TraceMode::Lines,
            line: line(MAX_COLOR, LineDash::Solid),
            marker: None,
        },
        Trace {
            name: format!("Yearly Minimum {label} Temp"),
            y: constant(stats.min),
            mode: TraceMode::Lines,
            line: line(MIN_COLOR, LineDash::Solid),
            marker: None,
        },
        Trace {
            name: format!("Mean Annual {label} Temp"),
            y: constant(stats.mean),
            mode: TraceMode::Lines,
            line: line(MEAN_COLOR, LineDash::Dash),
            marker: None,
        },
    ]
}

fn build_annotations(
    x_labels: &[String],
    stats: &SeriesStats,
    metric: MetricType,
) -> Vec<Annotation> {
    let label = metric.label();
    let annotation = |kind: AnnotationKind,
                      index: usize,
                      y: f64,
                      text: String,
                      color: &'static str,
                      ay: Option<i32>| Annotation {
        kind,
        index,
        x: x_labels[index].clone(),
        y,
        text,
        font_size: ANNOTATION_FONT_SIZE,
        arrow: ArrowStyle {
            head: 2,
            size: 1.0,
            width: 2.0,
            color,
            ay,
        },
    };

    vec![
        annotation(
            AnnotationKind::Max,
            stats.max_index,
            stats.max,
            format!(
                "Max {label} Temp<br>{}°F on {}",
                stats.max,
                short_date_label(&x_labels[stats.max_index])
            ),
            MAX_COLOR,
            None,
        ),
        annotation(
            AnnotationKind::Min,
            stats.min_index,
            stats.min,
            format!(
                "Min {label} Temp<br>{}°F on {}",
                stats.min,
                short_date_label(&x_labels[stats.min_index])
            ),
            MIN_COLOR,
            // Points up from below.
            Some(30),
        ),
        annotation(
            AnnotationKind::Mean,
            stats.closest_index,
            stats.mean,
            format!("Mean Avg {label}: {}°F", stats.mean),
            MEAN_COLOR,
            Some(-40),
        ),
    ]
}

fn build_x_axis(x_labels: &[String], tick_stride: usize) -> XAxis {
    let stride = tick_stride.max(1);
    let ticks = x_labels
        .iter()
        .enumerate()
        .step_by(stride)
        .map(|(index, label)| Tick {
            index,
            label: label.clone(),
        })
        .collect();
    let tick_text = x_labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            if index % stride == 0 {
                label.clone()
            } else {
                String::new()
            }
        })
        .collect();

    XAxis {
        title: X_AXIS_TITLE,
        ticks,
        tick_text,
        nticks: X_AXIS_NTICKS,
        tick_angle: X_AXIS_TICK_ANGLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::sample::Sample;

    // 2024-01-01T00:00:00Z
    const START_MS: i64 = 1_704_067_200_000;
    const DAY_MS: i64 = 86_400_000;

    fn series(station: &str, temps: &[f64]) -> Series {
        let samples = temps
            .iter()
            .enumerate()
            .map(|(i, t)| Sample::new(station, START_MS + i as i64 * DAY_MS, *t))
            .collect();
        Series::new(samples).unwrap()
    }

    #[test]
    fn test_chart_for_high_series() -> Result<(), Box<dyn std::error::Error>> {
        let series = series("Culver City", &[72.0, 85.0, 68.0, 85.0, 77.0]);
        let chart = build_chart(&series, MetricType::High, &ChartConfig::default())?;

        assert_eq!(chart.title, "High Temperatures in Culver City");
        assert_eq!(
            chart.x_labels,
            vec!["1/2/24", "1/3/24", "1/4/24", "1/5/24", "1/6/24"]
        );
        assert_eq!(chart.y_values, vec![72.0, 85.0, 68.0, 85.0, 77.0]);
        assert_eq!(chart.max_value, 85.0);
        assert_eq!(chart.min_value, 68.0);
        // 387 / 5 = 77.4
        assert_eq!(chart.mean_value, 77.0);
        assert_eq!(chart.closest_to_mean.temperature_f, 77.0);
        assert_eq!(chart.y_axis_range, (28.0, 128.0));
        Ok(())
    }

    #[test]
    fn test_annotations_use_first_occurrence() -> Result<(), Box<dyn std::error::Error>> {
        let series = series("Culver City", &[72.0, 85.0, 68.0, 85.0, 77.0]);
        let chart = build_chart(&series, MetricType::High, &ChartConfig::default())?;

        let max = chart.annotation(AnnotationKind::Max).ok_or("no max annotation")?;
        assert_eq!((max.index, max.x.as_str(), max.y), (1, "1/3/24", 85.0));
        assert_eq!(max.text, "Max High Temp<br>85°F on 1/3");
        assert_eq!(max.arrow.color, "red");
        assert_eq!(max.arrow.ay, None);

        let min = chart.annotation(AnnotationKind::Min).ok_or("no min annotation")?;
        assert_eq!((min.index, min.x.as_str(), min.y), (2, "1/4/24", 68.0));
        assert_eq!(min.text, "Min High Temp<br>68°F on 1/4");
        assert_eq!(min.arrow.ay, Some(30));

        let mean = chart.annotation(AnnotationKind::Mean).ok_or("no mean annotation")?;
        assert_eq!((mean.index, mean.x.as_str(), mean.y), (4, "1/6/24", 77.0));
        assert_eq!(mean.text, "Mean Avg High: 77°F");
        assert_eq!(mean.arrow.ay, Some(-40));
        Ok(())
    }

    #[test]
    fn test_low_chart_wording_and_range() -> Result<(), Box<dyn std::error::Error>> {
        let series = series("LAX Airport", &[51.0, 48.5, 55.0]);
        let chart = build_chart(&series, MetricType::Low, &ChartConfig::default())?;

        assert_eq!(chart.title, "Low Temperatures in LAX Airport");
        assert_eq!(chart.y_axis_range, (5.0, 95.0));
        let names: Vec<&str> = chart.traces.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Recorded Low Temperature",
                "Yearly Maximum Low Temp",
                "Yearly Minimum Low Temp",
                "Mean Annual Low Temp",
            ]
        );
        assert_eq!(chart.annotations[1].text, "Min Low Temp<br>48.5°F on 1/3");
        assert_eq!(chart.annotations[2].text, "Mean Avg Low: 52°F");
        Ok(())
    }

    #[test]
    fn test_y_range_ignores_data_outside_bounds() -> Result<(), Box<dyn std::error::Error>> {
        let series = series("Burbank", &[-20.0, 140.0]);
        let high = build_chart(&series, MetricType::High, &ChartConfig::default())?;
        let low = build_chart(&series, MetricType::Low, &ChartConfig::default())?;
        assert_eq!(high.y_axis_range, (28.0, 128.0));
        assert_eq!(low.y_axis_range, (5.0, 95.0));
        Ok(())
    }

    #[test]
    fn test_reference_traces_are_constant() -> Result<(), Box<dyn std::error::Error>> {
        let series = series("Burbank", &[60.0, 70.0, 65.0, 61.0]);
        let chart = build_chart(&series, MetricType::High, &ChartConfig::default())?;

        assert_eq!(chart.traces.len(), 4);
        assert_eq!(chart.traces[0].mode, TraceMode::LinesMarkers);
        assert_eq!(chart.traces[1].y, vec![70.0; 4]);
        assert_eq!(chart.traces[2].y, vec![60.0; 4]);
        assert_eq!(chart.traces[3].y, vec![64.0; 4]);
        assert_eq!(chart.traces[3].line.dash, LineDash::Dash);
        assert!(chart.traces[1..].iter().all(|t| t.marker.is_none()));
        Ok(())
    }

    #[test]
    fn test_ticks_every_thirty_samples() -> Result<(), Box<dyn std::error::Error>> {
        let temps: Vec<f64> = (0..90).map(|i| 60.0 + (i % 7) as f64).collect();
        let series = series("USC/Downtown LA", &temps);
        let chart = build_chart(&series, MetricType::High, &ChartConfig::default())?;

        let indices: Vec<usize> = chart.x_axis.ticks.iter().map(|t| t.index).collect();
        assert_eq!(indices, vec![0, 30, 60]);
        assert_eq!(chart.x_axis.ticks[1].label, chart.x_labels[30]);
        assert_eq!(chart.x_axis.tick_text.len(), 90);
        assert_eq!(
            chart.x_axis.tick_text.iter().filter(|t| !t.is_empty()).count(),
            3
        );
        assert_eq!(chart.x_axis.tick_text[1], "");
        Ok(())
    }

    #[test]
    fn test_custom_config_is_applied() -> Result<(), Box<dyn std::error::Error>> {
        let series = series("Burbank", &[60.0; 10]);
        let config = ChartConfig::builder()
            .tick_stride(5)
            .width(800)
            .high_y_range((0.0, 100.0))
            .build();
        let chart = build_chart(&series, MetricType::High, &config)?;

        assert_eq!(chart.x_axis.ticks.len(), 2);
        assert_eq!(chart.layout.width, 800);
        assert_eq!(chart.layout.height, 400);
        assert_eq!(chart.y_axis_range, (0.0, 100.0));
        Ok(())
    }

    #[test]
    fn test_single_sample_chart() -> Result<(), Box<dyn std::error::Error>> {
        let series = series("Redondo Beach", &[70.0]);
        let chart = build_chart(&series, MetricType::High, &ChartConfig::default())?;

        assert_eq!(chart.max_value, 70.0);
        assert_eq!(chart.min_value, 70.0);
        assert_eq!(chart.mean_value, 70.0);
        assert!(chart.annotations.iter().all(|a| a.index == 0));
        assert_eq!(chart.x_axis.ticks.len(), 1);
        Ok(())
    }

    #[test]
    fn test_invalid_samples_never_reach_the_chart() {
        // A chart needs a Series, and these inputs cannot become one.
        let nan = vec![
            Sample::new("LAX Airport", START_MS, f64::NAN),
            Sample::new("LAX Airport", START_MS + DAY_MS, 70.0),
        ];
        assert_eq!(
            Series::new(nan),
            Err(SeriesError::NonFiniteTemperature { position: 0 })
        );

        let mixed = vec![
            Sample::new("LAX Airport", START_MS, 65.0),
            Sample::new("Burbank", START_MS + DAY_MS, 70.0),
        ];
        assert_eq!(
            Series::new(mixed),
            Err(SeriesError::MixedStations {
                expected: "LAX Airport".to_string(),
                found: "Burbank".to_string(),
                position: 1,
            })
        );

        assert_eq!(Series::new(Vec::new()), Err(SeriesError::EmptySeries));
    }

    #[test]
    fn test_x_axis_tick_count_and_angle() -> Result<(), Box<dyn std::error::Error>> {
        let series = series("Burbank", &[60.0, 70.0]);
        let chart = build_chart(&series, MetricType::High, &ChartConfig::default())?;

        assert_eq!(chart.x_axis.nticks, 12);
        assert_eq!(chart.x_axis.tick_angle, 0.0);

        let json: serde_json::Value = serde_json::from_str(&chart.to_json()?)?;
        assert_eq!(json["xAxis"]["nticks"], 12);
        assert_eq!(json["xAxis"]["tickAngle"], 0.0);
        Ok(())
    }

    #[test]
    fn test_json_uses_camel_case() -> Result<(), Box<dyn std::error::Error>> {
        let series = series("Burbank", &[60.0, 70.0]);
        let chart = build_chart(&series, MetricType::Low, &ChartConfig::default())?;
        let json: serde_json::Value = serde_json::from_str(&chart.to_json()?)?;

        assert_eq!(json["title"], "Low Temperatures in Burbank");
        assert_eq!(json["metric"], "low");
        assert_eq!(json["yAxisRange"], serde_json::json!([5.0, 95.0]));
        assert_eq!(json["closestToMean"]["sId"], "Burbank");
        assert_eq!(json["xAxis"]["tickText"][0], "1/2/24");
        assert_eq!(json["annotations"][0]["kind"], "max");
        Ok(())
    }
}
