//! Application-wide constants.
//!
//! Centralizes reserved column names, theme values and layout numbers so the
//! chart builders read as policy rather than magic numbers.

// ============================================================================
// Reserved Columns
// ============================================================================

/// Column holding the categorical axis value / slice label
pub const CATEGORY_KEY: &str = "Category";

/// Column ignored by the Curve kind
pub const DATE_KEY: &str = "Date";

// ============================================================================
// Theme
// ============================================================================

/// Default first endpoint of the series gradient
pub const DEFAULT_FIRST_COLOR: &str = "#2BFFF5";

/// Default second endpoint of the series gradient
pub const DEFAULT_SECOND_COLOR: &str = "#044554";

/// Text and grid ink
pub const INK_COLOR: &str = "#0E0E0E";

/// Base label font size
pub const LABEL_FONT_SIZE: &str = "0.88em";

/// Base label font family
pub const LABEL_FONT_FAMILY: &str = "sans-serif";

/// Grid stroke opacity
pub const GRID_OPACITY: f32 = 0.5;

// ============================================================================
// Chart Layout
// ============================================================================

/// Corner radius of the rounded end of a column
pub const COLUMN_CORNER_RADIUS: f32 = 12.0;

/// Stroke width of curve lines
pub const CURVE_STROKE_WIDTH: f32 = 3.0;

/// Radius of the point marker drawn on every curve datum
pub const CURVE_MARKER_RADIUS: f32 = 4.0;

/// Padding above the legend
pub const LEGEND_PADDING_TOP: f32 = 20.0;

/// Divisor turning a funnel value into a label size in em
pub const PYRAMID_FONT_DIVISOR: f64 = 6.66;

/// Fallback upper bound of the funnel color range
pub const PYRAMID_DEFAULT_MAX: f64 = 100.0;

/// Bottom padding reserved per record under each pie (legend rows)
pub const PIE_ROW_PADDING: f32 = 23.0;

/// Horizontal padding around each pie
pub const PIE_SIDE_PADDING: f32 = 20.0;

// ============================================================================
// Surface & Host
// ============================================================================

/// Height / width ratio of a drawing surface
pub const DEFAULT_SURFACE_ASPECT: f32 = 0.42;

/// Default drawing surface width in pixels
pub const DEFAULT_SURFACE_WIDTH: u32 = 960;

/// Height of one grid row in pixels
pub const GRID_ROW_HEIGHT: u32 = 23;

/// Extra room requested from the host below the chart
pub const HOST_HEIGHT_PADDING: u32 = 100;

// ============================================================================
// Export
// ============================================================================

/// Default exported image width
pub const DEFAULT_EXPORT_WIDTH: u32 = 1200;

/// Default exported image height
pub const DEFAULT_EXPORT_HEIGHT: u32 = 504;

/// Debounce applied to file change events before a rebuild
pub const WATCH_DEBOUNCE_MS: u64 = 500;

/// Builds slower than this are logged as warnings
pub const BUILD_WARN_MS: f64 = 16.0;
