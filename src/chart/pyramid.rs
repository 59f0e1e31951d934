//! Funnel ("pyramid") charts.
//!
//! Unlike the other kinds, color is chosen per datum from its value rather
//! than per series from its index: funnel segments are ordered by magnitude.
//! Label size grows with the value too.

use super::common::theme;
use super::model::{
    ChartBody, ChartConfig, FunnelDatum, FunnelSeries, LabelSettings, Layout, SlicedChart,
};
use super::params::ChartParams;
use super::ChartKind;
use crate::color::clamp01;
use crate::constants::{CATEGORY_KEY, PYRAMID_DEFAULT_MAX, PYRAMID_FONT_DIVISOR};
use crate::data::{RecordArray, SeriesFilter};

/// Label size in em for a funnel value; never negative
pub fn label_font_size(value: f64) -> f64 {
    value.max(0.0) / PYRAMID_FONT_DIVISOR
}

/// Gradient position of a value inside `[min, max]` (defaults 0 and 100).
/// A max of zero counts as unset.
pub fn value_fraction(value: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    let low = min.unwrap_or(0.0);
    let high = max.filter(|max| *max != 0.0).unwrap_or(PYRAMID_DEFAULT_MAX);
    let range = high - low;
    if range == 0.0 {
        return 0.0;
    }
    clamp01((value - low) / range)
}

pub fn build_pyramid(records: &RecordArray, params: &ChartParams) -> ChartConfig {
    let template = format!(
        "[fontSize: 1em #0E0E0E]{{category}}:[/][bold] {{value}}{}[/]",
        params.axis_title
    );

    let series = records
        .series_keys(SeriesFilter::Standard)
        .into_iter()
        .map(|name| {
            let data = records
                .iter()
                .map(|record| {
                    let value = record.number(&name);
                    let magnitude = value.unwrap_or(0.0);
                    FunnelDatum {
                        category: record.category().to_string(),
                        value,
                        label: LabelSettings {
                            font_size_em: label_font_size(magnitude),
                            fill: params
                                .colors
                                .at(value_fraction(magnitude, params.min, params.max)),
                        },
                    }
                })
                .collect();

            FunnelSeries {
                category_field: CATEGORY_KEY.to_string(),
                value_field: name.clone(),
                name,
                orientation: Layout::from_vertical(params.vertical),
                align_labels: false,
                slice_fill_opacity: 0.0,
                link_fill_opacity: 0.0,
                label_template: template.clone(),
                data,
            }
        })
        .collect();

    ChartConfig {
        kind: ChartKind::Pyramid,
        locale: params.locale,
        theme: theme(),
        body: ChartBody::Sliced(SlicedChart {
            layout: Layout::Vertical,
            series,
        }),
        legend: None,
    }
}
