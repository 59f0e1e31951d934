//! Snapshot tests using the insta crate.
//!
//! These pin the serialized shapes a host renderer reads: small pieces of a
//! chart configuration, the exported records and the entry fields.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use chartfield::chart::{ChartKind, ChartParams};
use chartfield::color::Color;
use chartfield::data::text_to_records;
use chartfield::export::ExportOptions;
use chartfield::host::EntryFields;

#[test]
fn snapshot_pie_legend() {
    let params = ChartParams::default().with_colors(Color::rgb(0, 0, 0), Color::rgb(100, 100, 100));
    let config = ChartKind::Pie.build(&text_to_records("Category,A,B\nX,1,2\nY,3,4"), &params);

    insta::assert_json_snapshot!(config.legend, @r###"
    {
      "placement": {
        "type": "bottom"
      },
      "items": [
        {
          "label": "X",
          "color": "#000000"
        },
        {
          "label": "Y",
          "color": "#323232"
        }
      ]
    }
    "###);
}

#[test]
fn snapshot_records() {
    let records = text_to_records("Category,A,B\nQ1,10\nQ2,30,5");

    insta::assert_json_snapshot!(records.records, @r###"
    [
      {
        "Category": "Q1",
        "A": "10",
        "B": null
      },
      {
        "Category": "Q2",
        "A": "30",
        "B": "5"
      }
    ]
    "###);
}

#[test]
fn snapshot_default_export_options() {
    insta::assert_json_snapshot!(ExportOptions::default(), @r###"
    {
      "width": 1200,
      "height": 504,
      "background": "#FFFFFF"
    }
    "###);
}

#[test]
fn snapshot_entry_fields() {
    let fields = EntryFields {
        id: "entry-7".to_string(),
        kind: "Pie".to_string(),
        alignment: "Vertical".to_string(),
        data: Some("Category\tA".to_string()),
        ..EntryFields::default()
    };

    insta::assert_json_snapshot!(fields, @r###"
    {
      "id": "entry-7",
      "type": "Pie",
      "alignment": "Vertical",
      "stacked": false,
      "min": null,
      "max": null,
      "axeTitle": null,
      "data": "Category\tA"
    }
    "###);
}
