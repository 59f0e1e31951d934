//! Unit tests for surface ownership.

use crate::helpers::SALES_CSV;
use chartfield::chart::{ChartKind, ChartParams};
use chartfield::data::text_to_records;
use chartfield::surface::Surface;

#[test]
fn test_new_surface_is_empty() {
    let surface = Surface::default();
    assert!(surface.is_empty());
    assert_eq!(surface.width(), 960);
    assert_eq!(surface.height(), 403);
}

#[test]
fn test_one_live_chart_per_surface() {
    let records = text_to_records(SALES_CSV);
    let mut surface = Surface::new(800);

    let mut generations = Vec::new();
    for kind in ChartKind::all() {
        let handle = surface.attach(kind.build(&records, &ChartParams::default()));
        generations.push(handle.generation());
    }

    assert!(generations.windows(2).all(|w| w[0] < w[1]));
    let live = surface.current().unwrap();
    assert_eq!(live.generation(), *generations.last().unwrap());
    assert_eq!(live.config().kind, ChartKind::Pie);
}

#[test]
fn test_resize_changes_height() {
    let mut surface = Surface::new(500);
    surface.set_width(1000);
    assert_eq!(surface.height(), 420);
}
