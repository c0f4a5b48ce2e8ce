//! Leveled logging front end over a [`LogStore`]

use std::fmt::Display;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::clock::{Clock, SystemClock};
use crate::display::{ConsoleSink, DisplayHandle};
use crate::entry::{Level, LogEntry};
use crate::store::{LocalStore, LogStore, NullStore, Result, StoreOptions};

pub struct Logger {
    store: Arc<dyn LogStore>,
    clock: Arc<dyn Clock>,
    display: Option<DisplayHandle>,
    // Sink started by this logger, stopped when the logger is shut down or dropped
    owned_sink: Option<ConsoleSink>,
}

impl Logger {
    pub fn new(store: Arc<dyn LogStore>) -> Self {
        Self {
            store,
            clock: Arc::new(SystemClock),
            display: None,
            owned_sink: None,
        }
    }

    /// File-backed log in `options.dir`, mirrored to stdout when
    /// `options.print_to_stdout` is set
    pub fn local(options: &StoreOptions) -> Result<Self> {
        let store = LocalStore::open(&options.dir)?;
        let mut logger = Self::new(Arc::new(store));
        if options.print_to_stdout {
            logger = logger.with_owned_sink(ConsoleSink::stdout(options.line_spacing));
        }
        Ok(logger)
    }

    /// Log that prints to stdout and keeps no history
    pub fn console(line_spacing: usize) -> Self {
        Self::new(Arc::new(NullStore)).with_owned_sink(ConsoleSink::stdout(line_spacing))
    }

    /// Log that discards everything
    pub fn dev_null() -> Self {
        Self::new(Arc::new(NullStore))
    }

    /// Mirror entries to an externally owned display sink
    pub fn with_display(mut self, handle: DisplayHandle) -> Self {
        self.display = Some(handle);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    fn with_owned_sink(mut self, sink: ConsoleSink) -> Self {
        self.display = Some(sink.handle());
        self.owned_sink = Some(sink);
        self
    }

    pub fn store(&self) -> &Arc<dyn LogStore> {
        &self.store
    }

    /// Current time according to this logger's clock
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    fn log(&self, level: Level, message: impl Display) -> LogEntry {
        let entry = LogEntry::new(self.clock.now(), level, message.to_string());
        self.store.put(entry.clone());
        if let Some(display) = &self.display {
            display.send(entry.clone());
        }
        entry
    }

    pub fn info(&self, message: impl Display) -> LogEntry {
        self.log(Level::Info, message)
    }

    pub fn warning(&self, message: impl Display) -> LogEntry {
        self.log(Level::Warning, message)
    }

    pub fn error(&self, message: impl Display) -> LogEntry {
        self.log(Level::Error, message)
    }

    pub fn critical(&self, message: impl Display) -> LogEntry {
        self.log(Level::Critical, message)
    }

    pub fn get_by_id(&self, log_id: &str) -> Result<LogEntry> {
        self.store.get_by_id(log_id)
    }

    pub fn get(&self, before: DateTime<Utc>, level: Level, limit: usize) -> Result<Vec<LogEntry>> {
        self.store.get(before, level, limit)
    }

    /// Stop the display worker this logger started, after it renders what is queued
    pub fn shutdown(mut self) {
        if let Some(sink) = self.owned_sink.take() {
            sink.shutdown();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::store::StoreError;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn test_levels_are_stamped() {
        let temp = TempDir::new().unwrap();
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap();
        let clock = Arc::new(ManualClock::new(now));
        let store = LocalStore::open_with_clock(temp.path(), clock.clone()).unwrap();
        let log = Logger::new(Arc::new(store)).with_clock(clock);

        let info = log.info("a");
        let warning = log.warning(format_args!("{} {}", "b", 2));
        let error = log.error("c");
        let critical = log.critical(42);

        assert_eq!(info.level, Level::Info);
        assert_eq!(warning.level, Level::Warning);
        assert_eq!(warning.message, "b 2");
        assert_eq!(error.level, Level::Error);
        assert_eq!(critical.message, "42");
        assert!([&info, &warning, &error, &critical].iter().all(|e| e.time == now));

        assert_eq!(log.get_by_id(&error.log_id).unwrap(), error);
    }

    #[test]
    fn test_local_log_persists() {
        let temp = TempDir::new().unwrap();
        let options = StoreOptions::builder().dir(temp.path().join("logs")).build();

        let log = Logger::local(&options).unwrap();
        let entry = log.info("persisted");
        log.shutdown();

        let reopened = Logger::local(&options).unwrap();
        assert_eq!(reopened.get_by_id(&entry.log_id).unwrap(), entry);
    }

    #[test]
    fn test_dev_null_returns_entries_but_stores_nothing() {
        let log = Logger::dev_null();
        let entry = log.critical("gone");
        assert_eq!(entry.level, Level::Critical);
        assert!(matches!(log.get_by_id(&entry.log_id), Err(StoreError::NoStorage)));
        assert!(matches!(log.get(Utc::now(), Level::Any, 1), Err(StoreError::NoStorage)));
    }
}
