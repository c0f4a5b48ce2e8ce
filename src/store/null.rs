use chrono::{DateTime, Utc};

use crate::entry::{Level, LogEntry};

use super::LogStore;
use super::error::{Result, StoreError};

/// Store that keeps nothing.
///
/// Used by loggers that only print (console) or only discard (dev-null);
/// every query fails with [`StoreError::NoStorage`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl LogStore for NullStore {
    fn put(&self, _entry: LogEntry) {}

    fn get_by_id(&self, _log_id: &str) -> Result<LogEntry> {
        Err(StoreError::NoStorage)
    }

    fn get(&self, _before: DateTime<Utc>, _level: Level, _limit: usize) -> Result<Vec<LogEntry>> {
        Err(StoreError::NoStorage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queries_are_rejected() {
        let store = NullStore;
        store.put(LogEntry::new(Utc::now(), Level::Info, "dropped"));

        assert!(matches!(store.get_by_id("any"), Err(StoreError::NoStorage)));
        assert!(matches!(
            store.get(Utc::now(), Level::Any, 10),
            Err(StoreError::NoStorage)
        ));
    }
}
