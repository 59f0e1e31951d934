//! Error types for chart operations
//!
//! Parsing and building never fail: malformed tables, unknown chart kinds and
//! unknown locales degrade silently. Errors only come from the edges that
//! touch the outside world (files, encoders, watchers).

use thiserror::Error;

/// Errors that can occur around chart export, settings and watching
#[derive(Error, Debug)]
pub enum ChartError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error from serde_json
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// PNG encoding error
    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),

    /// Rasterizer error
    #[error("render error: {0}")]
    Render(String),

    /// File watcher error
    #[error("watch error: {0}")]
    Watch(#[from] notify::Error),

    /// Color literal that is not `#RGB` or `#RRGGBB`
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// Export requested while no chart is attached
    #[error("no chart attached to the surface")]
    NoChart,
}

/// Result type alias for chart operations
pub type ChartResult<T> = Result<T, ChartError>;
