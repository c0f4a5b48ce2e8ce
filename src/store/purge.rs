/// Daily retention: the purge marker and the sweep that clears a store directory
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::error::Result;
use super::layout::{is_entry_file, purge_marker_path};

/// Last purge time, persisted next to the entry files.
///
/// Loaded lazily on first use and trusted in memory afterwards.
#[derive(Debug)]
pub struct PurgeMarker {
    path: PathBuf,
    last_purge: Option<DateTime<Utc>>,
}

impl PurgeMarker {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: purge_marker_path(dir),
            last_purge: None,
        }
    }

    /// Cached marker value, reading it from disk the first time.
    ///
    /// A missing or unreadable marker is replaced by `now`.
    pub fn last_purge(&mut self, now: DateTime<Utc>) -> DateTime<Utc> {
        if let Some(last_purge) = self.last_purge {
            return last_purge;
        }

        match self.load() {
            Ok(last_purge) => {
                debug!(%last_purge, "Loaded purge marker");
                self.last_purge = Some(last_purge);
                last_purge
            }
            Err(e) => {
                debug!(error = %e, "No usable purge marker, starting a new one");
                self.set(now);
                now
            }
        }
    }

    /// Update the marker in memory and on disk (best-effort)
    pub fn set(&mut self, time: DateTime<Utc>) {
        self.last_purge = Some(time);
        if let Err(e) = self.store(time) {
            warn!(path = %self.path.display(), error = %e, "Failed to write purge marker");
        }
    }

    /// Whether `now` falls on a different UTC calendar date than the last purge
    pub fn is_due(&mut self, now: DateTime<Utc>) -> bool {
        self.last_purge(now).date_naive() != now.date_naive()
    }

    /// Marker value if it has already been loaded
    pub fn cached(&self) -> Option<DateTime<Utc>> {
        self.last_purge
    }

    fn load(&self) -> Result<DateTime<Utc>> {
        let data = fs::read(&self.path)?;
        Ok(serde_json::from_slice(&data)?)
    }

    fn store(&self, time: DateTime<Utc>) -> Result<()> {
        let data = serde_json::to_vec(&time)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

/// Delete every entry file in `dir`, returning how many were removed.
///
/// Failures are logged and skipped so one stuck file does not stop the sweep.
pub fn sweep(dir: &Path) -> usize {
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "Failed to list store directory for purge");
            return 0;
        }
    };

    let mut removed = 0;
    for item in read_dir {
        let path = match item {
            Ok(item) => item.path(),
            Err(e) => {
                warn!(error = %e, "Failed to read directory entry during purge");
                continue;
            }
        };

        if !is_entry_file(&path) {
            continue;
        }

        match fs::remove_file(&path) {
            Ok(()) => removed += 1,
            Err(e) => warn!(path = %path.display(), error = %e, "Failed to remove entry file"),
        }
    }

    removed
}
