//! Watching a data file for changes.
//!
//! The parent directory is watched rather than the file itself, because
//! editors often replace a file instead of writing into it. Events for other
//! files in the directory are ignored.

use crate::error::ChartResult;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// What happened to the watched file
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WatchEvent {
    /// Created or written
    Changed(PathBuf),
    Removed(PathBuf),
    Error(String),
}

#[derive(Debug)]
struct Pending {
    event: WatchEvent,
    at: Instant,
}

/// Latest event wins; bursts of writes collapse into one
type Slot = Arc<Mutex<Option<Pending>>>;

pub struct DataWatcher {
    path: PathBuf,
    debounce: Duration,
    slot: Slot,
    _watcher: RecommendedWatcher,
}

impl DataWatcher {
    pub fn new(path: impl Into<PathBuf>) -> ChartResult<Self> {
        Self::with_debounce(path, Duration::ZERO)
    }

    /// Events are only returned by [`poll`](Self::poll) once no newer event
    /// arrived for `debounce`
    pub fn with_debounce(path: impl Into<PathBuf>, debounce: Duration) -> ChartResult<Self> {
        let path = path.into();
        let slot: Slot = Arc::new(Mutex::new(None));

        let target = path.clone();
        let sink = Arc::clone(&slot);
        let mut watcher = notify::recommended_watcher(move |result: notify::Result<Event>| {
            let event = match result {
                Ok(event) => classify(&target, &event),
                Err(err) => Some(WatchEvent::Error(err.to_string())),
            };
            if let Some(event) = event {
                *sink.lock() = Some(Pending {
                    event,
                    at: Instant::now(),
                });
            }
        })?;

        let directory = watch_root(&path);
        watcher.watch(directory, RecursiveMode::NonRecursive)?;
        debug!(path = %path.display(), "watching data file");

        Ok(Self {
            path,
            debounce,
            slot,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Take the pending event, if it has settled
    pub fn poll(&mut self) -> Option<WatchEvent> {
        let mut slot = self.slot.lock();
        let settled = slot
            .as_ref()
            .is_some_and(|pending| pending.at.elapsed() >= self.debounce);
        if !settled {
            return None;
        }
        let event = slot.take().map(|pending| pending.event);
        if let Some(WatchEvent::Error(message)) = &event {
            warn!(path = %self.path.display(), error = %message, "watch error");
        }
        event
    }

    /// Block until an event settles or `timeout` passes
    pub fn wait(&mut self, timeout: Duration) -> Option<WatchEvent> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Some(event) = self.poll() {
                return Some(event);
            }
            if Instant::now() >= deadline {
                return None;
            }
            std::thread::sleep(Duration::from_millis(25));
        }
    }
}

fn watch_root(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn classify(target: &Path, event: &Event) -> Option<WatchEvent> {
    let name = target.file_name()?;
    if !event.paths.iter().any(|p| p.file_name() == Some(name)) {
        return None;
    }
    match event.kind {
        EventKind::Create(_) | EventKind::Modify(_) => {
            Some(WatchEvent::Changed(target.to_path_buf()))
        }
        EventKind::Remove(_) => Some(WatchEvent::Removed(target.to_path_buf())),
        _ => None,
    }
}
