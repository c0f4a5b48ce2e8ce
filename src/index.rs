//! In-memory time index over log entries.
//!
//! Entries are kept in a `Vec` sorted ascending by `time`. Writes usually carry
//! a timestamp close to "now", so insertion scans backward from the tail and
//! typically touches only the last few slots. Range queries binary-search the
//! upper bound and then walk toward older entries.

use chrono::{DateTime, Utc};

use crate::entry::{Level, LogEntry};

const INITIAL_CAPACITY: usize = 1000;

#[derive(Debug)]
pub struct SortedIndex {
    entries: Vec<LogEntry>,
}

impl SortedIndex {
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Insert keeping the index non-decreasing by time.
    ///
    /// The entry lands before any existing entries with an equal or later
    /// timestamp. Duplicate identifiers are not detected.
    pub fn insert(&mut self, entry: LogEntry) {
        let mut position = self.entries.len();
        while position > 0 && self.entries[position - 1].time >= entry.time {
            position -= 1;
        }
        self.entries.insert(position, entry);
    }

    pub fn find_by_id(&self, log_id: &str) -> Option<&LogEntry> {
        self.entries.iter().find(|entry| entry.log_id == log_id)
    }

    /// Up to `limit` entries strictly older than `before`, most recent first,
    /// filtered by `level` (`Level::Any` keeps everything).
    pub fn range_query(&self, before: DateTime<Utc>, level: Level, limit: usize) -> Vec<LogEntry> {
        let end = self.entries.partition_point(|entry| entry.time < before);

        self.entries[..end]
            .iter()
            .rev()
            .filter(|entry| level.matches(entry.level))
            .take(limit)
            .cloned()
            .collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.entries.shrink_to(INITIAL_CAPACITY);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }
}

impl Default for SortedIndex {
    fn default() -> Self {
        Self::new()
    }
}
