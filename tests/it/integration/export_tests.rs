//! Export workflow tests

use crate::helpers::{FieldsBuilder, RecordingHost, SALES_CSV};
use chartfield::export::{ExportFormat, ExportOptions};
use chartfield::host::FieldController;
use chartfield::surface::Surface;
use chartfield::ChartError;
use std::fs;
use tempfile::tempdir;

fn small_controller(kind: &str) -> FieldController<RecordingHost> {
    let fields = FieldsBuilder::new(kind).id("sales-2024").data(SALES_CSV).build();
    FieldController::new(RecordingHost::new(fields), Surface::new(400)).with_export_options(
        ExportOptions {
            width: 160,
            height: 90,
            ..ExportOptions::default()
        },
    )
}

#[test]
fn test_download_png_named_after_entry() {
    let dir = tempdir().unwrap();
    let mut controller = small_controller("Columns");
    controller.on_field_changed();

    let path = controller
        .exporter()
        .unwrap()
        .download(ExportFormat::Png, dir.path())
        .unwrap();

    assert_eq!(path, dir.path().join("sales-2024.png"));
    let image = image::open(&path).unwrap();
    assert_eq!((image.width(), image.height()), (160, 90));
}

#[test]
fn test_every_kind_exports() {
    let dir = tempdir().unwrap();
    for kind in ["Columns", "Curve", "Pyramid", "Pie"] {
        let mut controller = small_controller(kind);
        controller.on_field_changed();
        let path = controller
            .exporter()
            .unwrap()
            .download(ExportFormat::Png, &dir.path().join(kind))
            .unwrap();
        assert!(path.exists(), "{kind}");
    }
}

#[test]
fn test_exported_image_is_not_blank() {
    let mut controller = small_controller("Pie");
    controller.on_field_changed();
    let png = controller.exporter().unwrap().render_png().unwrap();

    let image = image::load_from_memory(&png).unwrap().to_rgb8();
    assert!(image.pixels().any(|p| p.0 != [255, 255, 255]));
}

#[test]
fn test_data_downloads() {
    let dir = tempdir().unwrap();
    let mut controller = small_controller("Curve");
    controller.on_field_changed();
    let exporter = controller.exporter().unwrap();

    let csv = exporter.download(ExportFormat::Csv, dir.path()).unwrap();
    assert_eq!(fs::read_to_string(csv).unwrap(), SALES_CSV);

    let json = exporter.download(ExportFormat::Json, dir.path()).unwrap();
    let rows: Vec<serde_json::Value> = serde_json::from_str(&fs::read_to_string(json).unwrap()).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2]["South"], "35");
}

#[test]
fn test_exporter_follows_rebuilds() {
    let mut controller = small_controller("Columns");
    controller.on_field_changed();
    let before = controller.exporter().unwrap().generation();

    controller.host_mut().fields.kind = "Pie".to_string();
    controller.on_field_changed();
    let after = controller.exporter().unwrap().generation();

    assert!(after > before);
}

#[test]
fn test_download_without_chart() {
    let dir = tempdir().unwrap();
    let mut controller = small_controller("Radar");
    controller.on_field_changed();

    let result = controller.download(ExportFormat::Png, dir.path());
    assert!(matches!(result, Err(ChartError::NoChart)));
}
