//! Chart configuration model.
//!
//! A [`ChartConfig`] is the complete, renderer-agnostic description of one
//! chart: theme, axes, series with their data, labels, tooltips and legend.
//! It serializes to JSON so any host-side renderer can consume it, and it is
//! what [`crate::export`] rasterizes.

use super::ChartKind;
use crate::color::Color;
use crate::locale::{Locale, NumberFormat};
use serde::{Deserialize, Serialize};

// ============================================================================
// Root
// ============================================================================

/// A built chart, ready to be attached to a surface
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub locale: Locale,
    pub theme: Theme,
    pub body: ChartBody,
    /// Present only when the chart has more than one series
    pub legend: Option<Legend>,
}

impl ChartConfig {
    /// Number of visual series (pie: number of sub-charts)
    pub fn series_count(&self) -> usize {
        match &self.body {
            ChartBody::Xy(chart) => chart.series.len(),
            ChartBody::Sliced(chart) => chart.series.len(),
            ChartBody::Pie(group) => group.charts.len(),
        }
    }

    pub fn series_names(&self) -> Vec<&str> {
        match &self.body {
            ChartBody::Xy(chart) => chart.series.iter().map(|s| s.name.as_str()).collect(),
            ChartBody::Sliced(chart) => chart.series.iter().map(|s| s.name.as_str()).collect(),
            ChartBody::Pie(group) => group.charts.iter().map(|c| c.series.name.as_str()).collect(),
        }
    }

    pub fn has_legend(&self) -> bool {
        self.legend.is_some()
    }

    pub fn as_xy(&self) -> Option<&XyChart> {
        match &self.body {
            ChartBody::Xy(chart) => Some(chart),
            _ => None,
        }
    }

    pub fn as_sliced(&self) -> Option<&SlicedChart> {
        match &self.body {
            ChartBody::Sliced(chart) => Some(chart),
            _ => None,
        }
    }

    pub fn as_pie(&self) -> Option<&PieGroup> {
        match &self.body {
            ChartBody::Pie(group) => Some(group),
            _ => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Shared label and grid styling
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub label_color: Color,
    pub label_font_size: String,
    pub font_family: String,
    pub grid_color: Color,
    pub grid_opacity: f32,
}

/// Kind-specific chart body
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ChartBody {
    /// Category/value axes (columns, curve)
    Xy(XyChart),
    /// Funnel slices (pyramid)
    Sliced(SlicedChart),
    /// Side-by-side pies
    Pie(PieGroup),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Layout {
    Vertical,
    Horizontal,
}

impl Layout {
    pub fn from_vertical(vertical: bool) -> Self {
        if vertical {
            Layout::Vertical
        } else {
            Layout::Horizontal
        }
    }
}

// ============================================================================
// XY Charts
// ============================================================================

/// Axis list an axis is pushed to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisSide {
    X,
    Y,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XyChart {
    pub pan_x: bool,
    pub layout: Layout,
    pub cursor: bool,
    pub number_format: NumberFormat,
    pub category_axis: CategoryAxis,
    pub value_axis: ValueAxis,
    pub axis_title: Option<AxisTitle>,
    pub series: Vec<XySeries>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAxis {
    pub side: AxisSide,
    pub field: String,
    /// Category labels in record order
    pub categories: Vec<String>,
    pub min_grid_distance: f32,
    pub grid_opacity: f32,
    pub inversed: bool,
    /// Label rotation in degrees
    pub label_rotation: f32,
    /// Portion of each category cell used by columns
    pub cell: Option<CellSpan>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellSpan {
    pub start: f32,
    pub end: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueAxis {
    pub side: AxisSide,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_grid_distance: Option<f32>,
    /// "Truncated axis" marker, set when the axis does not start at zero
    pub annotation: Option<AxisAnnotation>,
}

impl ValueAxis {
    pub fn is_truncated(&self) -> bool {
        self.annotation.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisAnnotation {
    pub text: String,
    pub x: f32,
    pub y_percent: f32,
    pub font_size: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TitlePlacement {
    Left,
    Bottom,
    /// Inside a pie sub-chart
    Inline,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisTitle {
    pub text: String,
    pub placement: TitlePlacement,
    pub rotation: f32,
    pub font_size: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XySeries {
    pub name: String,
    pub category_field: String,
    pub value_field: String,
    pub fill: Color,
    pub stroke: Option<Color>,
    pub stacked: bool,
    pub mark: SeriesMark,
    pub tooltip: Tooltip,
    pub value_label: Option<ValueLabel>,
    pub data: Vec<DataPoint>,
}

impl XySeries {
    /// Value of the datum for `category`, if present and numeric
    pub fn value_at(&self, category: &str) -> Option<f64> {
        self.data
            .iter()
            .find(|p| p.category == category)
            .and_then(|p| p.value)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SeriesMark {
    Column(ColumnStyle),
    Line(LineStyle),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnStyle {
    pub width_percent: f32,
    pub corners: Corners,
    pub stroke_opacity: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Corners {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyle {
    pub stroke_width: f32,
    pub marker: PointMarker,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointMarker {
    pub radius: f32,
    pub fill: Color,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub text: String,
}

/// Label bullet showing a datum's value next to its column
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueLabel {
    pub location_x: f32,
    pub location_y: f32,
    pub center_x_percent: f32,
    pub center_y_percent: f32,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub category: String,
    pub value: Option<f64>,
    /// Value rendered with the chart's number format and locale
    pub formatted: Option<String>,
}

// ============================================================================
// Sliced Charts
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlicedChart {
    pub layout: Layout,
    pub series: Vec<FunnelSeries>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelSeries {
    pub name: String,
    pub category_field: String,
    pub value_field: String,
    pub orientation: Layout,
    pub align_labels: bool,
    pub slice_fill_opacity: f32,
    pub link_fill_opacity: f32,
    pub label_template: String,
    pub data: Vec<FunnelDatum>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FunnelDatum {
    pub category: String,
    pub value: Option<f64>,
    pub label: LabelSettings,
}

/// Per-datum label styling: bigger values get bigger glyphs
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelSettings {
    pub font_size_em: f64,
    pub fill: Color,
}

// ============================================================================
// Pie Charts
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PieGroup {
    pub charts: Vec<PieChart>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieChart {
    pub width_percent: f32,
    pub x_percent: f32,
    pub padding_side: f32,
    pub padding_bottom: f32,
    pub name_label: String,
    pub axis_title: Option<AxisTitle>,
    pub series: PieSeries,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSeries {
    pub name: String,
    pub category_field: String,
    pub value_field: String,
    pub stroke: Color,
    pub stroke_opacity: f32,
    pub stroke_width: f32,
    pub tooltip: Tooltip,
    pub label_text: String,
    pub label_radius: f32,
    pub legend_label_text: String,
    pub legend_value_text: String,
    pub slices: Vec<Slice>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub category: String,
    pub value: Option<f64>,
    pub fill: Color,
}

// ============================================================================
// Legend
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum LegendPlacement {
    /// Below the plot, after the series
    Below { padding_top: f32 },
    /// Anchored to the bottom of the container, stacked vertically
    Bottom,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub placement: LegendPlacement,
    pub items: Vec<LegendItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LegendItem {
    pub label: String,
    pub color: Color,
}
