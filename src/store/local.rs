use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::entry::{Level, LogEntry};
use crate::index::SortedIndex;
use crate::observability::StoreMetrics;

use super::LogStore;
use super::error::{Result, StoreError};
use super::layout::{entry_path, is_entry_file};
use super::purge::{PurgeMarker, sweep};

/// State guarded by the store lock
struct Inner {
    index: SortedIndex,
    marker: PurgeMarker,
}

/// File-backed log store with an in-memory time index
///
/// Every entry is written to its own JSON file in `dir` and inserted into a
/// [`SortedIndex`] that serves all queries. The index is rebuilt from the
/// directory on open. Once per UTC day the first read or write clears both the
/// directory and the index.
pub struct LocalStore {
    dir: PathBuf,
    inner: Mutex<Inner>,
    clock: Arc<dyn Clock>,
    metrics: Arc<StoreMetrics>,
}

impl LocalStore {
    /// Open or create a store in `dir` using the system clock
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        Self::open_with_clock(dir, Arc::new(SystemClock))
    }

    pub fn open_with_clock<P: AsRef<Path>>(dir: P, clock: Arc<dyn Clock>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        info!("Opening log store at: {}", dir.display());

        fs::create_dir_all(&dir).map_err(|source| StoreError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let metrics = Arc::new(StoreMetrics::new());
        let index = recover(&dir, &metrics);
        let snapshot = metrics.snapshot();
        info!(
            recovered = snapshot.recovered,
            skipped = snapshot.recovery_skipped,
            "Log store opened"
        );

        Ok(Self {
            inner: Mutex::new(Inner {
                index,
                marker: PurgeMarker::new(&dir),
            }),
            dir,
            clock,
            metrics,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn metrics(&self) -> &StoreMetrics {
        &self.metrics
    }

    /// Number of entries currently indexed
    pub fn len(&self) -> usize {
        self.inner.lock().index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Last purge time, if the marker has been loaded yet
    pub fn last_purge(&self) -> Option<DateTime<Utc>> {
        self.inner.lock().marker.cached()
    }

    /// Clear the directory and the index when the UTC date has changed since
    /// the last purge
    fn purge_if_new_day(&self) {
        let now = self.clock.now();
        let mut inner = self.inner.lock();
        if !inner.marker.is_due(now) {
            return;
        }

        let removed = sweep(&self.dir);
        inner.index.clear();
        inner.marker.set(now);
        self.metrics.purged(removed);
        info!(files_removed = removed, "Purged log store for new day");
    }

    fn write_entry_file(&self, entry: &LogEntry) -> Result<()> {
        let path = entry_path(&self.dir, &entry.log_id).ok_or_else(|| {
            StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("log id {:?} is not a valid file name", entry.log_id),
            ))
        })?;
        fs::write(path, entry.encode()?)?;
        Ok(())
    }
}

impl LogStore for LocalStore {
    fn put(&self, entry: LogEntry) {
        if entry.level == Level::Any {
            self.metrics.write_failed();
            warn!(log_id = %entry.log_id, "Dropping log entry without a concrete level");
            return;
        }

        self.purge_if_new_day();

        let mut inner = self.inner.lock();

        match self.write_entry_file(&entry) {
            Ok(()) => self.metrics.entry_written(),
            Err(e) => {
                self.metrics.write_failed();
                warn!(log_id = %entry.log_id, error = %e, "Failed to persist log entry");
            }
        }

        debug!(log_id = %entry.log_id, level = %entry.level, "Indexed log entry");
        inner.index.insert(entry);
    }

    fn get_by_id(&self, log_id: &str) -> Result<LogEntry> {
        self.purge_if_new_day();

        let inner = self.inner.lock();
        inner
            .index
            .find_by_id(log_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(log_id.to_string()))
    }

    fn get(&self, before: DateTime<Utc>, level: Level, limit: usize) -> Result<Vec<LogEntry>> {
        if limit == 0 {
            return Err(StoreError::InvalidLimit(limit));
        }

        self.purge_if_new_day();

        let inner = self.inner.lock();
        let entries = inner.index.range_query(before, level, limit);
        debug!(%before, %level, limit, found = entries.len(), "Queried log entries");
        Ok(entries)
    }
}

/// Rebuild the index from the entry files in `dir`.
///
/// Files that cannot be read or decoded are skipped.
fn recover(dir: &Path, metrics: &StoreMetrics) -> SortedIndex {
    let mut index = SortedIndex::new();

    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "Failed to list store directory");
            return index;
        }
    };

    for item in read_dir {
        let path = match item {
            Ok(item) => item.path(),
            Err(e) => {
                warn!(error = %e, "Failed to read directory entry during recovery");
                continue;
            }
        };

        if !is_entry_file(&path) {
            continue;
        }

        match load_entry(&path) {
            Ok(entry) => {
                index.insert(entry);
                metrics.entry_recovered();
            }
            Err(e) => {
                metrics.recovery_skipped();
                warn!(path = %path.display(), error = %e, "Skipping unreadable log entry file");
            }
        }
    }

    index
}

fn load_entry(path: &Path) -> Result<LogEntry> {
    let data = fs::read(path)?;
    Ok(LogEntry::decode(&data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::{Duration, TimeZone};
    use tempfile::TempDir;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    fn create_test_store() -> (LocalStore, Arc<ManualClock>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let clock = Arc::new(ManualClock::new(noon()));
        let store = LocalStore::open_with_clock(temp_dir.path().join("logs"), clock.clone()).unwrap();
        (store, clock, temp_dir)
    }

    fn entry_at(minutes: i64, level: Level) -> LogEntry {
        LogEntry::new(noon() - Duration::minutes(minutes), level, format!("{} min ago", minutes))
    }

    #[test]
    fn test_open_creates_directory() {
        let (store, _clock, _temp) = create_test_store();
        assert!(store.dir().is_dir());
        assert!(store.is_empty());
    }

    #[test]
    fn test_open_fails_when_directory_cannot_be_created() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("file");
        fs::write(&blocker, b"not a dir").unwrap();

        let result = LocalStore::open(blocker.join("logs"));
        assert!(matches!(result, Err(StoreError::CreateDir { .. })));
    }

    #[test]
    fn test_put_writes_one_file_per_entry() {
        let (store, _clock, _temp) = create_test_store();
        let entry = entry_at(5, Level::Info);
        store.put(entry.clone());

        let path = entry_path(store.dir(), &entry.log_id).unwrap();
        let on_disk = LogEntry::decode(&fs::read(path).unwrap()).unwrap();
        assert_eq!(on_disk, entry);
        assert_eq!(store.metrics().snapshot().entries_written, 1);
    }

    #[test]
    fn test_put_with_unwritable_id_still_indexes() {
        let (store, _clock, _temp) = create_test_store();
        let mut entry = entry_at(5, Level::Error);
        entry.log_id = "../outside".to_string();
        store.put(entry);

        assert_eq!(store.len(), 1);
        assert!(store.get_by_id("../outside").is_ok());
        assert_eq!(store.metrics().snapshot().write_failures, 1);
    }

    #[test]
    fn test_get_by_id_not_found() {
        let (store, _clock, _temp) = create_test_store();
        store.put(entry_at(1, Level::Info));

        match store.get_by_id("missing") {
            Err(StoreError::NotFound(id)) => assert_eq!(id, "missing"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_get_rejects_zero_limit() {
        let (store, _clock, _temp) = create_test_store();
        store.put(entry_at(1, Level::Info));

        let result = store.get(noon(), Level::Any, 0);
        assert!(matches!(result, Err(StoreError::InvalidLimit(0))));
    }

    #[test]
    fn test_put_drops_query_only_level() {
        let (store, _clock, _temp) = create_test_store();
        let entry = entry_at(1, Level::Any);
        store.put(entry.clone());

        assert!(store.is_empty());
        assert!(!entry_path(store.dir(), &entry.log_id).unwrap().exists());
        assert_eq!(store.metrics().snapshot().write_failures, 1);
        assert_eq!(store.last_purge(), None);
    }

    #[test]
    fn test_zero_limit_rejected_before_purge_check() {
        let (store, clock, _temp) = create_test_store();
        store.put(entry_at(1, Level::Info));
        let marker = store.last_purge();

        clock.advance(Duration::days(1));
        let result = store.get(clock.now(), Level::Any, 0);

        assert!(matches!(result, Err(StoreError::InvalidLimit(0))));
        assert_eq!(store.len(), 1);
        assert_eq!(store.last_purge(), marker);
        assert_eq!(store.metrics().snapshot().purges, 0);
    }

    #[test]
    fn test_get_on_empty_store_is_empty_vec() {
        let (store, _clock, _temp) = create_test_store();
        assert!(store.get(noon(), Level::Any, 10).unwrap().is_empty());
    }

    #[test]
    fn test_purge_on_new_day() {
        let (store, clock, _temp) = create_test_store();
        let old = entry_at(30, Level::Warning);
        store.put(old.clone());
        assert_eq!(store.len(), 1);

        clock.advance(Duration::days(1));
        let fresh = LogEntry::new(clock.now(), Level::Info, "after midnight");
        store.put(fresh.clone());

        assert_eq!(store.len(), 1);
        assert!(matches!(store.get_by_id(&old.log_id), Err(StoreError::NotFound(_))));
        assert!(!entry_path(store.dir(), &old.log_id).unwrap().exists());
        assert!(entry_path(store.dir(), &fresh.log_id).unwrap().exists());
        assert_eq!(store.last_purge(), Some(clock.now()));
        assert_eq!(store.metrics().snapshot().purges, 1);
    }

    #[test]
    fn test_no_purge_within_same_day() {
        let (store, clock, _temp) = create_test_store();
        store.put(entry_at(30, Level::Info));

        clock.advance(Duration::hours(11));
        store.put(LogEntry::new(clock.now(), Level::Info, "late"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.metrics().snapshot().purges, 0);
    }
}
