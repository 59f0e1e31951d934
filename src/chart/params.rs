//! Display parameters shared by every chart kind.

use super::density::DensityPolicy;
use crate::color::{Color, ColorStop};
use crate::locale::Locale;

/// Host-supplied styling for one build
#[derive(Clone, Debug, PartialEq)]
pub struct ChartParams {
    /// Category axis horizontal (columns grow upward); `false` swaps the axes
    pub vertical: bool,
    pub stacked: bool,
    /// Lower bound of the value axis
    pub min: Option<f64>,
    /// Upper bound of the value axis
    pub max: Option<f64>,
    /// Empty means no title
    pub axis_title: String,
    pub colors: ColorStop,
    pub locale: Locale,
    pub density: DensityPolicy,
}

impl Default for ChartParams {
    fn default() -> Self {
        Self {
            vertical: true,
            stacked: false,
            min: None,
            max: None,
            axis_title: String::new(),
            colors: ColorStop::default(),
            locale: Locale::default(),
            density: DensityPolicy::default(),
        }
    }
}

impl ChartParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vertical(mut self, vertical: bool) -> Self {
        self.vertical = vertical;
        self
    }

    pub fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    pub fn with_bounds(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn with_axis_title(mut self, title: impl Into<String>) -> Self {
        self.axis_title = title.into();
        self
    }

    pub fn with_colors(mut self, first: Color, second: Color) -> Self {
        self.colors = ColorStop::new(first, second);
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_density(mut self, density: DensityPolicy) -> Self {
        self.density = density;
        self
    }

    /// The value axis starts above zero
    pub fn is_truncated(&self) -> bool {
        self.min.is_some_and(|min| min > 0.0)
    }

    pub fn title(&self) -> Option<&str> {
        Some(self.axis_title.as_str()).filter(|t| !t.is_empty())
    }
}
