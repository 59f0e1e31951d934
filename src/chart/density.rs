//! Visual density policy for category axes.
//!
//! Label rotation and column width depend on how many categories share the
//! axis. The thresholds live in a small table so the builders stay testable
//! independently of them.

use super::model::CellSpan;
use serde::{Deserialize, Serialize};

/// Presentation chosen for one category-count bucket
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DensityRule {
    /// Inclusive upper bound of the bucket, `None` for the last one
    pub max_categories: Option<usize>,
    pub label_rotation: f32,
    pub column_width_percent: f32,
    pub cell: Option<CellSpan>,
}

/// Ordered density buckets; the first matching rule wins
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DensityPolicy {
    rules: Vec<DensityRule>,
}

impl Default for DensityPolicy {
    fn default() -> Self {
        Self::new(vec![
            DensityRule {
                max_categories: Some(4),
                label_rotation: 0.0,
                column_width_percent: 120.0,
                cell: Some(CellSpan { start: 0.1, end: 0.9 }),
            },
            DensityRule {
                max_categories: Some(6),
                label_rotation: 0.0,
                column_width_percent: 88.0,
                cell: None,
            },
            DensityRule {
                max_categories: None,
                label_rotation: -80.0,
                column_width_percent: 88.0,
                cell: None,
            },
        ])
    }
}

impl DensityPolicy {
    pub fn new(rules: Vec<DensityRule>) -> Self {
        Self { rules }
    }

    /// A single rule applied to every category count
    pub fn uniform(rule: DensityRule) -> Self {
        Self::new(vec![DensityRule {
            max_categories: None,
            ..rule
        }])
    }

    pub fn rule_for(&self, categories: usize) -> DensityRule {
        self.rules
            .iter()
            .find(|rule| rule.max_categories.is_none_or(|max| categories <= max))
            .or_else(|| self.rules.last())
            .copied()
            .unwrap_or(DensityRule {
                max_categories: None,
                label_rotation: 0.0,
                column_width_percent: 88.0,
                cell: None,
            })
    }
}
