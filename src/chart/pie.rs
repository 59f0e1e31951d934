//! Side-by-side pie charts, one per series.

use super::common::{axis_title, ink, theme};
use super::model::{
    ChartBody, ChartConfig, Legend, LegendItem, LegendPlacement, PieChart, PieGroup, PieSeries,
    Slice, TitlePlacement, Tooltip,
};
use super::params::ChartParams;
use super::ChartKind;
use crate::constants::{CATEGORY_KEY, PIE_ROW_PADDING, PIE_SIDE_PADDING};
use crate::data::{RecordArray, SeriesFilter};

pub fn build_pie(records: &RecordArray, params: &ChartParams) -> ChartConfig {
    let keys = records.series_keys(SeriesFilter::Standard);
    let width = if keys.is_empty() {
        100.0
    } else {
        100.0 / keys.len() as f32
    };
    let total = records.len();

    let charts: Vec<PieChart> = keys
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let slices = records
                .iter()
                .enumerate()
                .map(|(index, record)| Slice {
                    category: record.category().to_string(),
                    value: record.number(name),
                    fill: params.colors.at(index as f64 / total as f64),
                })
                .collect();

            PieChart {
                width_percent: width,
                x_percent: width * i as f32,
                padding_side: PIE_SIDE_PADDING,
                padding_bottom: PIE_ROW_PADDING * total as f32,
                name_label: name.clone(),
                axis_title: axis_title(params, TitlePlacement::Inline, "0.75em"),
                series: PieSeries {
                    name: name.clone(),
                    category_field: CATEGORY_KEY.to_string(),
                    value_field: name.clone(),
                    stroke: ink(),
                    stroke_opacity: 0.0,
                    stroke_width: 1.0,
                    tooltip: Tooltip {
                        text: "{category}: {value}".to_string(),
                    },
                    label_text: "{value}".to_string(),
                    label_radius: 10.0,
                    legend_label_text: "{category}".to_string(),
                    legend_value_text: String::new(),
                    slices,
                },
            }
        })
        .collect();

    // Categories are the same in every pie, so the legend comes from the first.
    let legend = charts
        .first()
        .filter(|_| charts.len() > 1)
        .map(|first| Legend {
            placement: LegendPlacement::Bottom,
            items: first
                .series
                .slices
                .iter()
                .map(|slice| LegendItem {
                    label: slice.category.clone(),
                    color: slice.fill,
                })
                .collect(),
        });

    ChartConfig {
        kind: ChartKind::Pie,
        locale: params.locale,
        theme: theme(),
        body: ChartBody::Pie(PieGroup { charts }),
        legend,
    }
}
