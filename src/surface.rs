//! Drawing surfaces and the chart attached to them.
//!
//! A [`Surface`] holds at most one live [`ChartHandle`]. Attaching a new
//! configuration releases the previous handle first, and there is no way to
//! obtain a handle other than attaching, so two configurations can never be
//! live on one surface at the same time.

use crate::chart::ChartConfig;
use crate::constants::{DEFAULT_SURFACE_ASPECT, DEFAULT_SURFACE_WIDTH};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

static GENERATION: AtomicU64 = AtomicU64::new(1);

/// A chart configuration owned by a surface
#[derive(Debug)]
pub struct ChartHandle {
    generation: u64,
    config: ChartConfig,
}

impl ChartHandle {
    fn new(config: ChartConfig) -> Self {
        Self {
            generation: GENERATION.fetch_add(1, Ordering::Relaxed),
            config,
        }
    }

    /// Unique, increasing id of this attachment
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }
}

impl Drop for ChartHandle {
    fn drop(&mut self) {
        debug!(
            generation = self.generation,
            kind = %self.config.kind,
            "disposed chart"
        );
    }
}

/// A caller-owned drawing area
#[derive(Debug)]
pub struct Surface {
    width: u32,
    aspect: f32,
    slot: Option<ChartHandle>,
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(DEFAULT_SURFACE_WIDTH)
    }
}

impl Surface {
    pub fn new(width: u32) -> Self {
        Self {
            width,
            aspect: DEFAULT_SURFACE_ASPECT,
            slot: None,
        }
    }

    pub fn with_aspect(mut self, aspect: f32) -> Self {
        self.aspect = aspect;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    /// Height requested for the chart area
    pub fn height(&self) -> u32 {
        (self.width as f32 * self.aspect).round() as u32
    }

    /// Replace the attached chart. The previous one is disposed before the
    /// new one is stored.
    pub fn attach(&mut self, config: ChartConfig) -> &ChartHandle {
        self.dispose();
        let handle = ChartHandle::new(config);
        debug!(generation = handle.generation, kind = %handle.config.kind, "attached chart");
        self.slot.insert(handle)
    }

    /// Release the attached chart, if any
    pub fn dispose(&mut self) {
        drop(self.slot.take());
    }

    pub fn current(&self) -> Option<&ChartHandle> {
        self.slot.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}
