//! Unit tests for the chart builders, through the public dispatch.

use crate::helpers::{SALES_CSV, SERIES_WITH_DATE};
use chartfield::chart::{
    AxisSide, ChartKind, ChartParams, DensityPolicy, DensityRule, Layout, LegendPlacement,
    SeriesMark, build_chart,
};
use chartfield::color::Color;
use chartfield::data::text_to_records;
use chartfield::locale::Locale;

fn gray_params() -> ChartParams {
    ChartParams::default().with_colors(Color::rgb(0, 0, 0), Color::rgb(100, 100, 100))
}

// ============================================================================
// Columns
// ============================================================================

#[test]
fn test_columns_two_series() {
    let records = text_to_records("Category,A,B\nQ1,10,20\nQ2,30,5");
    let params = ChartParams::default().with_bounds(Some(0.0), None);
    let config = ChartKind::Columns.build(&records, &params);
    let chart = config.as_xy().unwrap();

    assert_eq!(config.series_names(), vec!["A", "B"]);
    assert_eq!(chart.category_axis.categories, vec!["Q1", "Q2"]);
    assert_eq!(chart.series[0].value_at("Q1"), Some(10.0));
    assert_eq!(chart.series[1].value_at("Q2"), Some(5.0));
    assert!(config.has_legend());
    assert!(!chart.value_axis.is_truncated());
}

#[test]
fn test_columns_colors_reverse_the_gradient() {
    let records = text_to_records("Category,A,B,C\nX,1,2,3");
    let config = ChartKind::Columns.build(&records, &gray_params());
    let fills: Vec<Color> = config.as_xy().unwrap().series.iter().map(|s| s.fill).collect();

    assert_eq!(
        fills,
        vec![Color::rgb(100, 100, 100), Color::rgb(50, 50, 50), Color::rgb(0, 0, 0)]
    );
}

#[test]
fn test_single_column_series_uses_second_color() {
    let config = ChartKind::Columns.build(&text_to_records("Category,A\nX,1"), &gray_params());
    let series = &config.as_xy().unwrap().series[0];
    assert_eq!(series.fill, Color::rgb(100, 100, 100));
    assert_eq!(series.tooltip.text, "{categoryX}: {valueY}");
    assert!(!config.has_legend());
}

#[test]
fn test_horizontal_columns_swap_axes() {
    let params = ChartParams::default().with_vertical(false);
    let config = ChartKind::Columns.build(&text_to_records(SALES_CSV), &params);
    let chart = config.as_xy().unwrap();

    assert_eq!(chart.category_axis.side, AxisSide::Y);
    assert!(chart.category_axis.inversed);
    assert_eq!(chart.value_axis.side, AxisSide::X);
    assert_eq!(chart.series[0].tooltip.text, "{name}, {categoryY}: {valueX}");
}

#[test]
fn test_stacked_flag_reaches_every_series() {
    let params = ChartParams::default().with_stacked(true);
    let config = ChartKind::Columns.build(&text_to_records(SALES_CSV), &params);
    assert!(config.as_xy().unwrap().series.iter().all(|s| s.stacked));
}

#[test]
fn test_density_follows_category_count() {
    let few = ChartKind::Columns.build(&text_to_records("Category,A\na,1\nb,2"), &ChartParams::default());
    let many = ChartKind::Columns.build(
        &text_to_records("Category,A\na,1\nb,1\nc,1\nd,1\ne,1\nf,1\ng,1"),
        &ChartParams::default(),
    );

    let few = few.as_xy().unwrap();
    assert_eq!(few.category_axis.label_rotation, 0.0);
    assert!(few.category_axis.cell.is_some());
    match &few.series[0].mark {
        SeriesMark::Column(style) => assert_eq!(style.width_percent, 120.0),
        other => panic!("expected columns, got {other:?}"),
    }

    let many = many.as_xy().unwrap();
    assert_eq!(many.category_axis.label_rotation, -80.0);
    assert!(many.category_axis.cell.is_none());
}

#[test]
fn test_custom_density_policy() {
    let policy = DensityPolicy::uniform(DensityRule {
        max_categories: Some(1),
        label_rotation: -45.0,
        column_width_percent: 50.0,
        cell: None,
    });
    let params = ChartParams::default().with_density(policy);
    let config = ChartKind::Columns.build(&text_to_records(SALES_CSV), &params);
    assert_eq!(config.as_xy().unwrap().category_axis.label_rotation, -45.0);
}

#[test]
fn test_truncation_marker_is_localized() {
    let records = text_to_records(SALES_CSV);
    for kind in [ChartKind::Columns, ChartKind::Curve] {
        let params = ChartParams::default()
            .with_bounds(Some(5.0), None)
            .with_locale(Locale::French);
        let config = kind.build(&records, &params);
        let axis = &config.as_xy().unwrap().value_axis;
        assert!(axis.is_truncated(), "{kind}");
        assert_eq!(axis.annotation.as_ref().unwrap().text, "tronqué");
    }
}

#[test]
fn test_column_values_use_si_format() {
    let records = text_to_records("Category,A\nX,2500");
    let config = ChartKind::Columns.build(&records, &ChartParams::default());
    let point = &config.as_xy().unwrap().series[0].data[0];
    assert_eq!(point.formatted.as_deref(), Some("2.5k"));
}

// ============================================================================
// Curve
// ============================================================================

#[test]
fn test_curve_ignores_date_column() {
    let config = ChartKind::Curve.build(&text_to_records(SERIES_WITH_DATE), &ChartParams::default());
    assert_eq!(config.series_names(), vec!["Visits"]);
    assert!(!config.has_legend());
}

#[test]
fn test_curve_single_series_uses_first_color() {
    let config = ChartKind::Curve.build(&text_to_records("Category,A\nX,1"), &gray_params());
    let series = &config.as_xy().unwrap().series[0];
    assert_eq!(series.fill, Color::rgb(0, 0, 0));
    assert_eq!(series.stroke, Some(series.fill));
}

#[test]
fn test_curve_keeps_categories_on_x() {
    let params = ChartParams::default().with_vertical(false);
    let config = ChartKind::Curve.build(&text_to_records(SALES_CSV), &params);
    let chart = config.as_xy().unwrap();
    assert_eq!(chart.category_axis.side, AxisSide::X);
    assert_eq!(chart.layout, Layout::Horizontal);
    assert!(chart.cursor);
    assert!(matches!(chart.series[0].mark, SeriesMark::Line(_)));
}

#[test]
fn test_curve_legend_below_plot() {
    let config = ChartKind::Curve.build(&text_to_records(SALES_CSV), &ChartParams::default());
    let legend = config.legend.unwrap();
    assert_eq!(legend.placement, LegendPlacement::Below { padding_top: 20.0 });
    assert_eq!(legend.items.len(), 2);
}

// ============================================================================
// Pyramid and Pie
// ============================================================================

#[test]
fn test_pyramid_one_funnel_per_series() {
    let params = ChartParams::default().with_vertical(false);
    let config = ChartKind::Pyramid.build(&text_to_records(SALES_CSV), &params);
    let sliced = config.as_sliced().unwrap();

    assert_eq!(sliced.series.len(), 2);
    assert_eq!(sliced.series[0].orientation, Layout::Horizontal);
    assert_eq!(sliced.series[0].data[1].value, Some(30.0));
    assert!(!config.has_legend());
}

#[test]
fn test_pyramid_colors_follow_bounds() {
    let params = gray_params().with_bounds(Some(10.0), Some(30.0));
    let config = ChartKind::Pyramid.build(&text_to_records(SALES_CSV), &params);
    let north = &config.as_sliced().unwrap().series[0];

    assert_eq!(north.data[0].label.fill, Color::rgb(0, 0, 0));
    assert_eq!(north.data[1].label.fill, Color::rgb(100, 100, 100));
    assert_eq!(north.data[2].label.fill, Color::rgb(75, 75, 75));
}

#[test]
fn test_pie_slices_cover_every_record() {
    let config = ChartKind::Pie.build(&text_to_records(SALES_CSV), &ChartParams::default());
    let group = config.as_pie().unwrap();

    assert_eq!(group.charts.len(), 2);
    for chart in &group.charts {
        let categories: Vec<&str> = chart.series.slices.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(categories, vec!["Q1", "Q2", "Q3"]);
        assert_eq!(chart.padding_bottom, 69.0);
    }
    assert_eq!(config.legend.unwrap().placement, LegendPlacement::Bottom);
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_unknown_kind_yields_nothing() {
    let records = text_to_records(SALES_CSV);
    for kind in ["", "Big numbers", "pie", "Table"] {
        assert!(build_chart(kind, &records, &ChartParams::default()).is_none(), "{kind:?}");
    }
}

#[test]
fn test_header_only_input_builds_empty_charts() {
    let records = text_to_records("Category,A");
    for kind in ChartKind::all() {
        let config = kind.build(&records, &ChartParams::default());
        assert_eq!(config.series_count(), 1, "{kind}");
    }
}
