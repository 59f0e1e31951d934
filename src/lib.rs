//! Chart fields for spreadsheet-style tables.
//!
//! Delimited text goes in, a themed [`chart::ChartConfig`] comes out. The
//! configuration lives on a [`surface::Surface`] and can be exported as PNG
//! or as the source data through [`export::Exporter`]. [`host::FieldController`]
//! ties this to a host that stores the entry fields.

pub mod chart;
pub mod color;
pub mod constants;
pub mod data;
pub mod error;
pub mod export;
pub mod host;
pub mod locale;
pub mod perf;
pub mod settings;
pub mod surface;
pub mod watcher;

pub use error::{ChartError, ChartResult};
