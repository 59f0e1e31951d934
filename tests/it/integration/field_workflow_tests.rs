//! Field controller workflow tests

use crate::helpers::{FieldsBuilder, RecordingHost, SALES_CSV, matrix};
use chartfield::chart::ChartKind;
use chartfield::constants::{GRID_ROW_HEIGHT, HOST_HEIGHT_PADDING};
use chartfield::host::{AxisTitleField, FieldController};
use chartfield::surface::Surface;
use std::collections::BTreeMap;

fn controller(host: RecordingHost) -> FieldController<RecordingHost> {
    FieldController::new(host, Surface::new(1000))
}

#[test]
fn test_build_forwards_height() {
    let fields = FieldsBuilder::new("Columns").data(SALES_CSV).build();
    let mut controller = controller(RecordingHost::new(fields));

    assert_eq!(controller.on_field_changed(), Some(ChartKind::Columns));
    let expected = 420 + 4 * GRID_ROW_HEIGHT + HOST_HEIGHT_PADDING;
    assert_eq!(controller.host().last_height(), Some(expected));
    assert_eq!(controller.records().len(), 3);
}

#[test]
fn test_unknown_kind_leaves_surface_empty() {
    let fields = FieldsBuilder::new("Big numbers").data(SALES_CSV).build();
    let mut controller = controller(RecordingHost::new(fields));

    assert_eq!(controller.on_field_changed(), None);
    assert!(controller.surface().is_empty());
    assert!(controller.exporter().is_none());
    let expected = 4 * GRID_ROW_HEIGHT + HOST_HEIGHT_PADDING;
    assert_eq!(controller.host().last_height(), Some(expected));
}

#[test]
fn test_every_change_is_a_full_rebuild() {
    let fields = FieldsBuilder::new("Columns").data(SALES_CSV).build();
    let mut controller = controller(RecordingHost::new(fields));

    controller.on_field_changed();
    let first = controller.surface().current().unwrap().generation();

    controller.host_mut().fields.kind = "Curve".to_string();
    controller.on_field_changed();
    controller.host_mut().fields.min = Some(5.0);
    controller.on_field_changed();

    let live = controller.surface().current().unwrap();
    assert!(live.generation() > first);
    assert_eq!(live.config().kind, ChartKind::Curve);
    assert!(live.config().as_xy().unwrap().value_axis.is_truncated());
    assert_eq!(controller.host().heights.len(), 3);
}

#[test]
fn test_changing_kind_away_disposes_chart() {
    let fields = FieldsBuilder::new("Pie").data(SALES_CSV).build();
    let mut controller = controller(RecordingHost::new(fields));
    controller.on_field_changed();
    assert!(!controller.surface().is_empty());

    controller.host_mut().fields.kind = "Table".to_string();
    controller.on_field_changed();
    assert!(controller.surface().is_empty());
}

#[test]
fn test_grid_commit_stores_tab_text_and_rebuilds() {
    let fields = FieldsBuilder::new("Columns").data(SALES_CSV).build();
    let mut controller = controller(RecordingHost::new(fields));
    controller.on_field_changed();

    let edited = matrix(&[&["Category", "North"], &["Q1", "12,5"], &["Q2", "7"]]);
    controller.on_grid_committed(&edited);

    assert_eq!(controller.host().stored, vec!["Category\tNorth\nQ1\t12,5\nQ2\t7"]);
    let config = controller.surface().current().unwrap().config();
    let series = &config.as_xy().unwrap().series;
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].value_at("Q1"), Some(12.5));
    assert_eq!(controller.grid_matrix(), edited);
}

#[test]
fn test_empty_field_shows_default_grid() {
    let fields = FieldsBuilder::new("Columns").build();
    let controller = controller(RecordingHost::new(fields));
    assert_eq!(controller.grid_matrix(), matrix(&[&["Category"], &[""]]));
}

#[test]
fn test_fields_drive_the_build() {
    let fields = FieldsBuilder::new("Columns")
        .data(SALES_CSV)
        .horizontal()
        .stacked()
        .title("Units")
        .build();
    let mut controller = controller(RecordingHost::new(fields));
    controller.on_field_changed();

    let config = controller.surface().current().unwrap().config();
    let chart = config.as_xy().unwrap();
    assert!(chart.category_axis.inversed);
    assert!(chart.series.iter().all(|s| s.stacked));
    assert_eq!(chart.axis_title.as_ref().unwrap().text, "Units");
}

#[test]
fn test_title_follows_host_locale() {
    let mut fields = FieldsBuilder::new("Curve").data(SALES_CSV).build();
    fields.axe_title = Some(AxisTitleField::Localized(BTreeMap::from([
        ("en-CA".to_string(), "Sales".to_string()),
        ("fr-CA".to_string(), "Ventes".to_string()),
    ])));
    let host = RecordingHost::new(fields).with_locale("fr-CA");
    let mut controller = controller(host);
    controller.on_field_changed();

    let config = controller.surface().current().unwrap().config();
    assert_eq!(config.as_xy().unwrap().axis_title.as_ref().unwrap().text, "Ventes");
}
