//! User settings stored as JSON in the platform config directory.
//!
//! A missing file means defaults. A file that exists but does not parse is an
//! error, so a typo is reported instead of silently ignored.

use crate::chart::ChartParams;
use crate::color::{Color, ColorStop};
use crate::constants::{
    DEFAULT_EXPORT_HEIGHT, DEFAULT_EXPORT_WIDTH, DEFAULT_SURFACE_WIDTH, WATCH_DEBOUNCE_MS,
};
use crate::error::ChartResult;
use crate::export::ExportOptions;
use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

const APP_DIR: &str = "chartfield";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Locale tag used when the host does not provide one
    pub locale: String,
    pub first_color: Color,
    pub second_color: Color,
    pub export_width: u32,
    pub export_height: u32,
    pub export_background: Color,
    pub surface_width: u32,
    pub watch_debounce_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        let theme = ColorStop::default();
        Self {
            locale: Locale::default().tag().to_string(),
            first_color: theme.first,
            second_color: theme.second,
            export_width: DEFAULT_EXPORT_WIDTH,
            export_height: DEFAULT_EXPORT_HEIGHT,
            export_background: Color::rgb(255, 255, 255),
            surface_width: DEFAULT_SURFACE_WIDTH,
            watch_debounce_ms: WATCH_DEBOUNCE_MS,
        }
    }
}

/// `<config dir>/chartfield/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join(APP_DIR).join(SETTINGS_FILE))
}

impl Settings {
    /// Load from `path`, falling back to defaults when the file is absent
    pub fn load(path: &Path) -> ChartResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&content)?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Load from the default location
    pub fn load_default() -> ChartResult<Self> {
        match default_settings_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn save(&self, path: &Path) -> ChartResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn locale(&self) -> Locale {
        Locale::from_tag(&self.locale)
    }

    pub fn colors(&self) -> ColorStop {
        ColorStop::new(self.first_color, self.second_color)
    }

    /// Base chart parameters: colors and locale from settings, everything
    /// else default
    pub fn chart_params(&self) -> ChartParams {
        ChartParams {
            colors: self.colors(),
            ..ChartParams::default()
        }
        .with_locale(self.locale())
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            width: self.export_width,
            height: self.export_height,
            background: self.export_background,
        }
    }

    pub fn watch_debounce(&self) -> Duration {
        Duration::from_millis(self.watch_debounce_ms)
    }
}
