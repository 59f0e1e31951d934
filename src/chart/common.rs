//! Assembly helpers shared by the chart builders.

use super::model::{
    AxisAnnotation, AxisSide, AxisTitle, DataPoint, Legend, LegendItem, LegendPlacement, Theme,
    TitlePlacement, Tooltip, XySeries,
};
use super::params::ChartParams;
use crate::color::Color;
use crate::constants::{
    GRID_OPACITY, INK_COLOR, LABEL_FONT_FAMILY, LABEL_FONT_SIZE, LEGEND_PADDING_TOP,
};
use crate::data::RecordArray;
use crate::locale::NumberFormat;

pub(crate) fn ink() -> Color {
    Color::from_hex(INK_COLOR).unwrap_or(Color::rgb(0x0E, 0x0E, 0x0E))
}

pub(crate) fn theme() -> Theme {
    Theme {
        label_color: ink(),
        label_font_size: LABEL_FONT_SIZE.to_string(),
        font_family: LABEL_FONT_FAMILY.to_string(),
        grid_color: ink(),
        grid_opacity: GRID_OPACITY,
    }
}

/// Gradient position of series `index` out of `count`, last series at 0 and
/// first at 1. A lone series sits at 0.
pub(crate) fn reverse_fraction(index: usize, count: usize) -> f64 {
    if count > 1 {
        (count - 1 - index) as f64 / (count - 1) as f64
    } else {
        0.0
    }
}

/// Localized "truncated axis" marker when the value axis starts above zero
pub(crate) fn truncation_annotation(params: &ChartParams) -> Option<AxisAnnotation> {
    params.is_truncated().then(|| AxisAnnotation {
        text: params.locale.truncated_label().to_string(),
        x: -50.0,
        y_percent: 100.0,
        font_size: "0.66em".to_string(),
    })
}

pub(crate) fn axis_title(
    params: &ChartParams,
    placement: TitlePlacement,
    font_size: &str,
) -> Option<AxisTitle> {
    params.title().map(|text| AxisTitle {
        text: text.to_string(),
        placement,
        rotation: match placement {
            TitlePlacement::Bottom => 0.0,
            TitlePlacement::Left | TitlePlacement::Inline => -90.0,
        },
        font_size: font_size.to_string(),
    })
}

/// `{name}, {categoryX}: {valueY}` style tooltip; the series name is only
/// shown when there is more than one series.
pub(crate) fn xy_tooltip(multi: bool, category_side: AxisSide) -> Tooltip {
    let prefix = if multi { "{name}, " } else { "" };
    let body = match category_side {
        AxisSide::X => "{categoryX}: {valueY}",
        AxisSide::Y => "{categoryY}: {valueX}",
    };
    Tooltip {
        text: format!("{prefix}{body}"),
    }
}

/// Numeric data of one series in record order
pub(crate) fn data_points(
    records: &RecordArray,
    key: &str,
    params: &ChartParams,
    format: NumberFormat,
) -> Vec<DataPoint> {
    records
        .iter()
        .map(|record| {
            let value = record.number(key);
            DataPoint {
                category: record.category().to_string(),
                value,
                formatted: value.map(|v| params.locale.format(v, format)),
            }
        })
        .collect()
}

/// Legend listing each series, emitted only for more than one series
pub(crate) fn series_legend(series: &[XySeries]) -> Option<Legend> {
    (series.len() > 1).then(|| Legend {
        placement: LegendPlacement::Below {
            padding_top: LEGEND_PADDING_TOP,
        },
        items: series
            .iter()
            .map(|s| LegendItem {
                label: s.name.clone(),
                color: s.fill,
            })
            .collect(),
    })
}
