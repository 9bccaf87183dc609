//! Data structures describing a fully resolved chart, ready to hand to a renderer.
//!
//! Nothing in here draws anything. A [`ChartSpec`] is plain data that serializes to
//! JSON with camelCase keys; a front-end plotting library turns it into pixels.

use crate::types::metric::MetricType;
use crate::types::sample::Sample;
use serde::Serialize;

pub const X_AXIS_TITLE: &str = "Date";
/// Upper bound on the number of ticks the renderer draws.
pub const X_AXIS_NTICKS: u32 = 12;
/// Tick labels stay horizontal.
pub const X_AXIS_TICK_ANGLE: f64 = 0.0;
pub const Y_AXIS_TITLE: &str = "Temperature (°F)";
pub const PLOT_BACKGROUND: &str = "#F9F6CF";
pub const PAPER_BACKGROUND: &str = "transparent";
pub const FONT_FAMILY: &str = "Roboto mono, monospace";
pub const FONT_COLOR: &str = "#6A4B3E";
pub const ANNOTATION_FONT_SIZE: f64 = 9.5;

/// A complete, renderable chart for one series.
///
/// Produced by [`crate::build_chart`]. Recomputed on every selection and never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    /// e.g. "High Temperatures in Burbank".
    pub title: String,
    pub metric: MetricType,
    /// One date label per sample, in sample order.
    pub x_labels: Vec<String>,
    /// One temperature per sample, in sample order.
    pub y_values: Vec<f64>,
    pub max_value: f64,
    pub min_value: f64,
    /// Rounded half-up to a whole degree.
    pub mean_value: f64,
    /// Earliest sample nearest to `mean_value`.
    pub closest_to_mean: Sample,
    /// The recorded series followed by the max, min and mean reference lines.
    pub traces: Vec<Trace>,
    /// Max, min and mean annotations, in that order.
    pub annotations: Vec<Annotation>,
    /// Fixed per metric; not derived from the data.
    pub y_axis_range: (f64, f64),
    pub x_axis: XAxis,
    pub layout: Layout,
}

impl ChartSpec {
    /// Serializes the chart for a JavaScript renderer.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn annotation(&self, kind: AnnotationKind) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.kind == kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TraceMode {
    Lines,
    LinesMarkers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LineDash {
    Solid,
    Dash,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyle {
    pub width: f64,
    pub color: &'static str,
    pub dash: LineDash,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    pub size: f64,
    pub color: &'static str,
}

/// One plotted line. Its points line up with [`ChartSpec::x_labels`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trace {
    /// Legend entry, e.g. "Yearly Maximum Low Temp".
    pub name: String,
    pub y: Vec<f64>,
    pub mode: TraceMode,
    pub line: LineStyle,
    pub marker: Option<MarkerStyle>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AnnotationKind {
    Max,
    Min,
    Mean,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowStyle {
    pub head: u8,
    pub size: f64,
    pub width: f64,
    pub color: &'static str,
    /// Vertical offset of the label from the anchor, in pixels. `None` keeps the
    /// renderer's default.
    pub ay: Option<i32>,
}

/// A labelled arrow pointing at one sample of the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub kind: AnnotationKind,
    /// Index of the anchored sample.
    pub index: usize,
    /// Date label of the anchored sample.
    pub x: String,
    pub y: f64,
    /// Text to display; `<br>` marks a line break.
    pub text: String,
    pub font_size: f64,
    pub arrow: ArrowStyle,
}

/// A labelled x-axis tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tick {
    pub index: usize,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XAxis {
    pub title: &'static str,
    /// Only the positions that carry a label.
    pub ticks: Vec<Tick>,
    /// One entry per sample; blank where no tick label is shown.
    pub tick_text: Vec<String>,
    pub nticks: u32,
    pub tick_angle: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub y_axis_title: &'static str,
    pub plot_background: &'static str,
    pub paper_background: &'static str,
    pub font_family: &'static str,
    pub font_color: &'static str,
}
