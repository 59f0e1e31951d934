//! Line charts over the category axis.

use super::common::{
    axis_title, data_points, reverse_fraction, series_legend, theme, truncation_annotation,
    xy_tooltip,
};
use super::model::{
    AxisSide, CategoryAxis, ChartBody, ChartConfig, Layout, LineStyle, PointMarker, SeriesMark,
    TitlePlacement, ValueAxis, XyChart, XySeries,
};
use super::params::ChartParams;
use super::ChartKind;
use crate::constants::{CATEGORY_KEY, CURVE_MARKER_RADIUS, CURVE_STROKE_WIDTH};
use crate::data::{RecordArray, SeriesFilter};
use crate::locale::NumberFormat;

/// Categories always run along X; `vertical` only picks the chart layout.
/// A `Date` column is never charted.
pub fn build_curve(records: &RecordArray, params: &ChartParams) -> ChartConfig {
    let keys = records.series_keys(SeriesFilter::IgnoreDate);
    let multi = keys.len() > 1;

    let value_axis = ValueAxis {
        side: AxisSide::Y,
        min: params.min,
        max: params.max,
        min_grid_distance: None,
        annotation: truncation_annotation(params),
    };

    let category_axis = CategoryAxis {
        side: AxisSide::X,
        field: CATEGORY_KEY.to_string(),
        categories: records.categories(),
        min_grid_distance: 30.0,
        grid_opacity: 0.0,
        inversed: false,
        label_rotation: 0.0,
        cell: None,
    };

    let series: Vec<XySeries> = keys
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let fill = params.colors.at(reverse_fraction(i, keys.len()));
            XySeries {
                name: name.clone(),
                category_field: CATEGORY_KEY.to_string(),
                value_field: name.clone(),
                fill,
                stroke: Some(fill),
                stacked: false,
                mark: SeriesMark::Line(LineStyle {
                    stroke_width: CURVE_STROKE_WIDTH,
                    marker: PointMarker {
                        radius: CURVE_MARKER_RADIUS,
                        fill,
                    },
                }),
                tooltip: xy_tooltip(multi, AxisSide::X),
                value_label: None,
                data: data_points(records, name, params, NumberFormat::Plain),
            }
        })
        .collect();

    let legend = series_legend(&series);

    ChartConfig {
        kind: ChartKind::Curve,
        locale: params.locale,
        theme: theme(),
        body: ChartBody::Xy(XyChart {
            pan_x: false,
            layout: Layout::from_vertical(params.vertical),
            cursor: true,
            number_format: NumberFormat::Plain,
            category_axis,
            value_axis,
            axis_title: axis_title(params, TitlePlacement::Left, "0.75em"),
            series,
        }),
        legend,
    }
}
