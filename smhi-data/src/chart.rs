//! Chart description types handed to the drawing surface.
//!
//! All structs derive `Serialize` (camelCase) so they can be handed to the
//! Chart.js bridge as JSON from the Dioxus WASM frontend.

use serde::Serialize;
use smhi_api::Reading;

/// An RGB color, serialized as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// CSS `rgb()` notation.
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

/// How strongly a dataset is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    Normal,
    /// The cross-city average: thicker, dashed, drawn on top
    Average,
}

/// One plotted line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataset {
    pub label: String,
    /// Aligned with `ChartSpec::labels`; `None` renders as a gap.
    pub points: Vec<Reading>,
    pub color: Rgb,
    pub emphasis: Emphasis,
}

/// A chart title: one line, or several stacked lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChartTitle {
    Single(String),
    Lines(Vec<String>),
}

impl ChartTitle {
    pub fn lines(&self) -> Vec<&str> {
        match self {
            ChartTitle::Single(line) => vec![line.as_str()],
            ChartTitle::Lines(lines) => lines.iter().map(String::as_str).collect(),
        }
    }
}

/// X-axis tick thinning for long series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickPolicy {
    pub max_ticks: u32,
    pub rotation_degrees: u32,
}

/// Everything needed to draw one chart. Rebuilt wholesale for every payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub title: ChartTitle,
    pub x_axis_label: String,
    pub y_axis_label: String,
    /// X-axis labels (months), one per point in every dataset
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
    pub tick_policy: Option<TickPolicy>,
}
