//! Exporting a built chart as an image or its source data as a file.
//!
//! An [`Exporter`] borrows the [`ChartHandle`] it exports, so it cannot
//! outlive the attachment: after a rebuild the previous exporter is gone and
//! a new one has to be created for the new handle.

mod raster;

pub use raster::rasterize;

use crate::color::Color;
use crate::constants::{DEFAULT_EXPORT_HEIGHT, DEFAULT_EXPORT_WIDTH};
use crate::data::{Delimiter, RecordArray, records_to_text};
use crate::error::{ChartError, ChartResult};
use crate::perf::measure_and_log;
use crate::surface::ChartHandle;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, RgbImage};
use serde::{Deserialize, Serialize};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::info;

const EXPORT_WARN_MS: f64 = 250.0;

/// Formats offered by the export menu
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Png,
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
        }
    }
}

/// Raster size and background of image exports
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportOptions {
    pub width: u32,
    pub height: u32,
    pub background: Color,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_EXPORT_WIDTH,
            height: DEFAULT_EXPORT_HEIGHT,
            background: Color::rgb(255, 255, 255),
        }
    }
}

/// Export adapter bound to one chart attachment
pub struct Exporter<'a> {
    handle: &'a ChartHandle,
    records: &'a RecordArray,
    prefix: String,
    options: ExportOptions,
}

impl<'a> Exporter<'a> {
    /// `prefix` names every produced file
    pub fn new(handle: &'a ChartHandle, records: &'a RecordArray, prefix: impl Into<String>) -> Self {
        Self {
            handle,
            records,
            prefix: prefix.into(),
            options: ExportOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Generation of the attachment this exporter belongs to
    pub fn generation(&self) -> u64 {
        self.handle.generation()
    }

    pub fn file_name(&self, format: ExportFormat) -> String {
        format!("{}.{}", self.prefix, format.extension())
    }

    /// Encode the chart as a PNG image
    pub fn render_png(&self) -> ChartResult<Vec<u8>> {
        let ExportOptions {
            width,
            height,
            background,
        } = self.options;
        if width == 0 || height == 0 {
            return Err(ChartError::Render(format!(
                "cannot render a {}x{} image",
                width, height
            )));
        }

        let format = ExportFormat::Png.extension();
        measure_and_log("export", format, EXPORT_WARN_MS, || -> ChartResult<Vec<u8>> {
            let pixels = rasterize(self.handle.config(), width, height, background)?;
            let image = RgbImage::from_raw(width, height, pixels).ok_or_else(|| {
                ChartError::Render("raster buffer does not match image size".to_string())
            })?;

            let mut bytes = Cursor::new(Vec::new());
            image.write_to(&mut bytes, ImageFormat::Png)?;
            Ok(bytes.into_inner())
        })
    }

    /// PNG image as a `data:` URI
    pub fn to_data_uri(&self) -> ChartResult<String> {
        let png = self.render_png()?;
        Ok(format!(
            "data:{};base64,{}",
            ExportFormat::Png.mime_type(),
            STANDARD.encode(png)
        ))
    }

    /// File contents for `format`. Data formats export the source records.
    pub fn export_bytes(&self, format: ExportFormat) -> ChartResult<Vec<u8>> {
        match format {
            ExportFormat::Png => self.render_png(),
            ExportFormat::Json => {
                measure_and_log("export", format.extension(), EXPORT_WARN_MS, || {
                    serde_json::to_vec_pretty(&self.records.records).map_err(ChartError::from)
                })
            }
            ExportFormat::Csv => {
                measure_and_log("export", format.extension(), EXPORT_WARN_MS, || {
                    Ok(records_to_text(self.records, Delimiter::Comma).into_bytes())
                })
            }
        }
    }

    /// Write `<prefix>.<ext>` into `dir` and return its path
    pub fn download(&self, format: ExportFormat, dir: &Path) -> ChartResult<PathBuf> {
        let bytes = self.export_bytes(format)?;
        std::fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name(format));
        std::fs::write(&path, &bytes)?;
        info!(
            path = %path.display(),
            format = format.extension(),
            bytes = bytes.len(),
            generation = self.handle.generation(),
            "exported chart"
        );
        Ok(path)
    }
}
