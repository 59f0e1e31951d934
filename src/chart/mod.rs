//! Chart configuration builder
//!
//! One builder per [`ChartKind`], all sharing [`ChartParams`] and the helpers
//! in `common`. Every build is a pure, synchronous transform from a
//! [`RecordArray`] to a [`ChartConfig`].
//!
//! ## Coloring
//!
//! | Kind | Gradient position |
//! |---|---|
//! | Columns | reverse series index, second color for a lone series |
//! | Curve | reverse series index, first color for a lone series |
//! | Pyramid | datum value within `[min, max]` |
//! | Pie | slice index / slice count |

mod columns;
mod common;
mod curve;
mod density;
mod model;
mod params;
mod pie;
mod pyramid;

pub use columns::build_columns;
pub use curve::build_curve;
pub use density::*;
pub use model::*;
pub use params::*;
pub use pie::build_pie;
pub use pyramid::{build_pyramid, label_font_size, value_fraction};

use crate::constants::BUILD_WARN_MS;
use crate::data::RecordArray;
use crate::perf::ScopedTimer;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Types of charts available
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Columns,
    Curve,
    Pyramid,
    Pie,
}

impl ChartKind {
    /// Parse the host's chart type selector. Unknown values select nothing.
    pub fn from_field(value: &str) -> Option<Self> {
        match value {
            "Columns" => Some(ChartKind::Columns),
            "Curve" => Some(ChartKind::Curve),
            "Pyramid" => Some(ChartKind::Pyramid),
            "Pie" => Some(ChartKind::Pie),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Columns => "Columns",
            ChartKind::Curve => "Curve",
            ChartKind::Pyramid => "Pyramid",
            ChartKind::Pie => "Pie",
        }
    }

    pub fn all() -> &'static [ChartKind] {
        &[
            ChartKind::Columns,
            ChartKind::Curve,
            ChartKind::Pyramid,
            ChartKind::Pie,
        ]
    }

    /// Build a configuration of this kind
    pub fn build(&self, records: &RecordArray, params: &ChartParams) -> ChartConfig {
        let _timer = ScopedTimer::new("build", self.label(), BUILD_WARN_MS);
        let config = match self {
            ChartKind::Columns => build_columns(records, params),
            ChartKind::Curve => build_curve(records, params),
            ChartKind::Pyramid => build_pyramid(records, params),
            ChartKind::Pie => build_pie(records, params),
        };
        debug!(
            kind = self.label(),
            records = records.len(),
            series = config.series_count(),
            legend = config.has_legend(),
            "built chart"
        );
        config
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Build a chart from the host's raw type selector.
///
/// An unrecognized selector builds nothing; that is not an error.
pub fn build_chart(kind: &str, records: &RecordArray, params: &ChartParams) -> Option<ChartConfig> {
    match ChartKind::from_field(kind) {
        Some(kind) => Some(kind.build(records, params)),
        None => {
            debug!(kind, "unsupported chart kind, nothing built");
            None
        }
    }
}
