//! Timing of chart builds and exports.
//!
//! Both run synchronously on every field change. A [`ScopedTimer`] warns when
//! one of them is slower than its budget, tagged with the operation and the
//! chart kind or export format it worked on.
//!
//! With the `profiling` feature, `profile_scope!` traces every scope above
//! 1ms at `trace` level with nesting depth.

use std::time::Instant;
#[cfg(feature = "profiling")]
use tracing::trace;
use tracing::warn;

#[cfg(feature = "profiling")]
const PROFILE_TRACE_MS: f64 = 1.0;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
}

pub use crate::profile_scope;

#[cfg(feature = "profiling")]
thread_local! {
    static CURRENT_DEPTH: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

/// Warns on drop when `operation` on `subject` took longer than its budget
pub struct ScopedTimer {
    operation: &'static str,
    subject: &'static str,
    start: Instant,
    threshold_ms: f64,
    #[cfg(feature = "profiling")]
    depth: usize,
}

impl ScopedTimer {
    /// `subject` is what the operation ran on, e.g. `"Pie"` or `"png"`
    pub fn new(operation: &'static str, subject: &'static str, threshold_ms: f64) -> Self {
        #[cfg(feature = "profiling")]
        let depth = CURRENT_DEPTH.with(|d| {
            let current = d.get();
            d.set(current + 1);
            current
        });

        Self {
            operation,
            subject,
            start: Instant::now(),
            threshold_ms,
            #[cfg(feature = "profiling")]
            depth,
        }
    }

    /// Trace-only timer behind `profile_scope!`; never warns
    pub fn for_profiling(operation: &'static str) -> Self {
        Self::new(operation, "", f64::INFINITY)
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;

        #[cfg(feature = "profiling")]
        {
            CURRENT_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
            if elapsed_ms > PROFILE_TRACE_MS {
                let indent = "  ".repeat(self.depth);
                trace!("{}[PERF] {} {}: {:.2}ms", indent, self.operation, self.subject, elapsed_ms);
            }
        }

        if elapsed_ms > self.threshold_ms {
            warn!(
                operation = self.operation,
                subject = self.subject,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "slow chart operation"
            );
        }
    }
}

/// Run `f` under a [`ScopedTimer`] and hand back its result
#[inline]
pub fn measure_and_log<T, F: FnOnce() -> T>(
    operation: &'static str,
    subject: &'static str,
    threshold_ms: f64,
    f: F,
) -> T {
    let _timer = ScopedTimer::new(operation, subject, threshold_ms);
    f()
}
