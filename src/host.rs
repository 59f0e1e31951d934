//! Glue between a content-editing host and the chart surface.
//!
//! The host owns the entry fields and the stored table text. The controller
//! reads a fresh snapshot of the fields on every change, rebuilds the chart
//! from scratch and reports the height it needs back to the host.

use crate::chart::{ChartKind, ChartParams, build_chart};
use crate::constants::{GRID_ROW_HEIGHT, HOST_HEIGHT_PADDING};
use crate::data::{Matrix, RecordArray, default_matrix, matrix_to_text, text_to_matrix, text_to_records};
use crate::error::{ChartError, ChartResult};
use crate::export::{ExportFormat, ExportOptions, Exporter};
use crate::locale::Locale;
use crate::surface::Surface;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Axis title as stored by the host: one text, or one text per locale
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisTitleField {
    Text(String),
    Localized(BTreeMap<String, String>),
}

impl AxisTitleField {
    /// Text for `locale`: exact tag first, then any tag with the same
    /// language, else empty
    pub fn for_locale(&self, locale: &str) -> String {
        match self {
            AxisTitleField::Text(text) => text.clone(),
            AxisTitleField::Localized(texts) => {
                if let Some(text) = texts.get(locale) {
                    return text.clone();
                }
                let language = primary_subtag(locale);
                texts
                    .iter()
                    .find(|(tag, _)| primary_subtag(tag) == language)
                    .map(|(_, text)| text.clone())
                    .unwrap_or_default()
            }
        }
    }
}

fn primary_subtag(tag: &str) -> &str {
    tag.split(['-', '_']).next().unwrap_or_default()
}

/// Snapshot of the entry fields that drive a chart
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntryFields {
    /// Entry identifier, also the export file prefix
    pub id: String,
    /// Chart kind selector
    #[serde(rename = "type")]
    pub kind: String,
    /// `"Horizontal"` or anything else for vertical
    pub alignment: String,
    pub stacked: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub axe_title: Option<AxisTitleField>,
    /// Stored table text
    pub data: Option<String>,
}

impl EntryFields {
    pub fn is_vertical(&self) -> bool {
        self.alignment != "Horizontal"
    }

    pub fn axis_title(&self, locale: &str) -> String {
        self.axe_title
            .as_ref()
            .map(|title| title.for_locale(locale))
            .unwrap_or_default()
    }

    /// Table text, `None` when the field is empty
    pub fn table_text(&self) -> Option<&str> {
        self.data.as_deref().filter(|text| !text.is_empty())
    }

    /// Apply these fields on top of `base`
    pub fn chart_params(&self, locale: &str, base: &ChartParams) -> ChartParams {
        base.clone()
            .with_vertical(self.is_vertical())
            .with_stacked(self.stacked)
            .with_bounds(self.min, self.max)
            .with_axis_title(self.axis_title(locale))
            .with_locale(Locale::from_tag(locale))
    }
}

/// The editing environment a chart field lives in
pub trait Host {
    /// Current values of every entry field
    fn fields(&self) -> EntryFields;
    /// Locale tag of the field being edited
    fn locale(&self) -> &str;
    /// Ask the host to resize the field to `px`
    fn update_height(&mut self, px: u32);
    /// Persist new table text into the data field
    fn store_table(&mut self, text: String);
}

/// Rebuilds the chart of one field whenever the host reports a change
pub struct FieldController<H: Host> {
    host: H,
    surface: Surface,
    records: RecordArray,
    base: ChartParams,
    export: ExportOptions,
}

impl<H: Host> FieldController<H> {
    pub fn new(host: H, surface: Surface) -> Self {
        Self {
            host,
            surface,
            records: RecordArray::default(),
            base: ChartParams::default(),
            export: ExportOptions::default(),
        }
    }

    /// Colors and density every build starts from
    pub fn with_params(mut self, base: ChartParams) -> Self {
        self.base = base;
        self
    }

    pub fn with_export_options(mut self, options: ExportOptions) -> Self {
        self.export = options;
        self
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Records of the last build
    pub fn records(&self) -> &RecordArray {
        &self.records
    }

    /// Any field changed: dispose the current chart, rebuild from a fresh
    /// snapshot and forward the new height. Returns the kind built, if any.
    pub fn on_field_changed(&mut self) -> Option<ChartKind> {
        self.surface.dispose();

        let fields = self.host.fields();
        let locale = self.host.locale().to_string();
        self.records = text_to_records(fields.data.as_deref().unwrap_or_default());
        let params = fields.chart_params(&locale, &self.base);

        let built = build_chart(&fields.kind, &self.records, &params).map(|config| {
            let kind = config.kind;
            self.surface.attach(config);
            kind
        });

        let chart_height = if built.is_some() { self.surface.height() } else { 0 };
        let height = chart_height + self.grid_height(&fields) + HOST_HEIGHT_PADDING;
        self.host.update_height(height);

        debug!(
            entry = %fields.id,
            kind = %fields.kind,
            records = self.records.len(),
            height,
            "field rebuilt"
        );
        built
    }

    /// The grid was edited: store its text, then rebuild
    pub fn on_grid_committed(&mut self, matrix: &[Vec<String>]) -> Option<ChartKind> {
        let text = matrix_to_text(matrix);
        info!(rows = matrix.len(), bytes = text.len(), "storing table");
        self.host.store_table(text);
        self.on_field_changed()
    }

    /// Matrix shown in the grid editor
    pub fn grid_matrix(&self) -> Matrix {
        Self::matrix_of(&self.host.fields())
    }

    /// Exporter for the live chart, named after the entry id
    pub fn exporter(&self) -> Option<Exporter<'_>> {
        let handle = self.surface.current()?;
        let prefix = self.host.fields().id;
        Some(Exporter::new(handle, &self.records, prefix).with_options(self.export))
    }

    /// Export the live chart into `dir`
    pub fn download(&self, format: ExportFormat, dir: &Path) -> ChartResult<PathBuf> {
        self.exporter().ok_or(ChartError::NoChart)?.download(format, dir)
    }

    fn matrix_of(fields: &EntryFields) -> Matrix {
        fields.table_text().map(text_to_matrix).unwrap_or_else(default_matrix)
    }

    fn grid_height(&self, fields: &EntryFields) -> u32 {
        Self::matrix_of(fields).len() as u32 * GRID_ROW_HEIGHT
    }
}
