//! Grouped or stacked column charts.

use super::common::{
    axis_title, data_points, reverse_fraction, series_legend, theme, truncation_annotation,
    xy_tooltip,
};
use super::model::{
    AxisSide, CategoryAxis, ChartBody, ChartConfig, ColumnStyle, Corners, Layout, SeriesMark,
    TitlePlacement, ValueAxis, ValueLabel, XyChart, XySeries,
};
use super::params::ChartParams;
use super::ChartKind;
use crate::constants::{CATEGORY_KEY, COLUMN_CORNER_RADIUS};
use crate::data::{RecordArray, SeriesFilter};
use crate::locale::NumberFormat;

pub fn build_columns(records: &RecordArray, params: &ChartParams) -> ChartConfig {
    let keys = records.series_keys(SeriesFilter::Standard);
    let multi = keys.len() > 1;
    let vertical = params.vertical;
    let (category_side, value_side) = if vertical {
        (AxisSide::X, AxisSide::Y)
    } else {
        (AxisSide::Y, AxisSide::X)
    };

    let categories = records.categories();
    let density = params.density.rule_for(categories.len());

    let value_axis = ValueAxis {
        side: value_side,
        min: params.min,
        max: params.max,
        min_grid_distance: Some(30.0),
        annotation: truncation_annotation(params),
    };

    let category_axis = CategoryAxis {
        side: category_side,
        field: CATEGORY_KEY.to_string(),
        categories,
        min_grid_distance: 40.0,
        grid_opacity: 0.0,
        inversed: !vertical,
        label_rotation: density.label_rotation,
        cell: density.cell,
    };

    let title = if vertical {
        axis_title(params, TitlePlacement::Left, "1em")
    } else {
        axis_title(params, TitlePlacement::Bottom, "1em")
    };

    let corners = if vertical {
        Corners {
            top_left: COLUMN_CORNER_RADIUS,
            top_right: COLUMN_CORNER_RADIUS,
            ..Corners::default()
        }
    } else {
        Corners {
            top_right: COLUMN_CORNER_RADIUS,
            bottom_right: COLUMN_CORNER_RADIUS,
            ..Corners::default()
        }
    };

    let value_label = if vertical {
        ValueLabel {
            location_x: 0.5,
            location_y: 1.0,
            center_x_percent: 50.0,
            center_y_percent: 88.0,
            text: "{valueY}".to_string(),
        }
    } else {
        ValueLabel {
            location_x: 1.0,
            location_y: 0.5,
            center_x_percent: 10.0,
            center_y_percent: 50.0,
            text: "{valueX}".to_string(),
        }
    };

    let series: Vec<XySeries> = keys
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let fill = if multi {
                params.colors.at(reverse_fraction(i, keys.len()))
            } else {
                params.colors.second
            };
            XySeries {
                name: name.clone(),
                category_field: CATEGORY_KEY.to_string(),
                value_field: name.clone(),
                fill,
                stroke: None,
                stacked: params.stacked,
                mark: SeriesMark::Column(ColumnStyle {
                    width_percent: density.column_width_percent,
                    corners,
                    stroke_opacity: 0.0,
                }),
                tooltip: xy_tooltip(multi, category_side),
                value_label: Some(value_label.clone()),
                data: data_points(records, name, params, NumberFormat::Si),
            }
        })
        .collect();

    let legend = series_legend(&series);

    ChartConfig {
        kind: ChartKind::Columns,
        locale: params.locale,
        theme: theme(),
        body: ChartBody::Xy(XyChart {
            pan_x: vertical,
            layout: Layout::Vertical,
            cursor: false,
            number_format: NumberFormat::Si,
            category_axis,
            value_axis,
            axis_title: title,
            series,
        }),
        legend,
    }
}
