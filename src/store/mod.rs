//! Log entry storage
//!
//! [`LocalStore`] is the durable implementation: one JSON file per entry in a
//! store directory plus an in-memory [`SortedIndex`](crate::index::SortedIndex)
//! rebuilt from that directory on open.
//!
//! ## Directory layout
//!
//! - `<dir>/<log_id>.json`: one serialized [`LogEntry`]
//! - `<dir>/lastPurge.json`: time of the last purge
//!
//! ## Retention
//!
//! The store is meant for local development sessions. The first read or write
//! after the UTC date changes deletes every entry file and empties the index.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use logbox::entry::{Level, LogEntry};
//! use logbox::store::{LocalStore, LogStore};
//!
//! let store = LocalStore::open("data/logs")?;
//! store.put(LogEntry::new(Utc::now(), Level::Info, "hello"));
//! let recent = store.get(Utc::now(), Level::Any, 20)?;
//! # Ok::<(), logbox::store::StoreError>(())
//! ```
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::entry::{Level, LogEntry};

pub mod error;
pub mod layout;
mod local;
mod null;
pub mod purge;

pub use error::{Result, StoreError};
pub use local::LocalStore;
pub use null::NullStore;

/// Write path and queries shared by every log backend
pub trait LogStore: Send + Sync {
    /// Record an entry. Persistence failures are not reported to the caller.
    ///
    /// Entries at [`Level::Any`] are query-only and are dropped.
    fn put(&self, entry: LogEntry);

    /// Exact identifier lookup
    fn get_by_id(&self, log_id: &str) -> Result<LogEntry>;

    /// Up to `limit` entries strictly older than `before`, most recent first.
    ///
    /// `limit` must be greater than zero.
    fn get(&self, before: DateTime<Utc>, level: Level, limit: usize) -> Result<Vec<LogEntry>>;
}

/// Options for opening a local log
#[derive(Debug, Clone, bon::Builder)]
pub struct StoreOptions {
    /// Directory holding the entry files
    #[builder(into)]
    pub dir: PathBuf,
    /// Mirror every entry to stdout
    #[builder(default)]
    pub print_to_stdout: bool,
    /// Blank lines printed after each mirrored entry
    #[builder(default)]
    pub line_spacing: usize,
}
