//! Tracing setup and store counters

use std::sync::atomic::{AtomicU64, Ordering};

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter` when set.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A subscriber may already be installed (tests, embedding applications)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Counters for store activity, including failures that are never returned to callers
#[derive(Debug, Default)]
pub struct StoreMetrics {
    entries_written: AtomicU64,
    write_failures: AtomicU64,
    purges: AtomicU64,
    entries_purged: AtomicU64,
    recovered: AtomicU64,
    recovery_skipped: AtomicU64,
}

impl StoreMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry_written(&self) {
        self.entries_written.fetch_add(1, Ordering::Relaxed);
    }

    pub fn write_failed(&self) {
        self.write_failures.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "write_failures", "Metric incremented");
    }

    pub fn purged(&self, files_removed: usize) {
        self.purges.fetch_add(1, Ordering::Relaxed);
        self.entries_purged
            .fetch_add(files_removed as u64, Ordering::Relaxed);
        tracing::debug!(counter = "purges", files_removed, "Metric incremented");
    }

    pub fn entry_recovered(&self) {
        self.recovered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn recovery_skipped(&self) {
        self.recovery_skipped.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "recovery_skipped", "Metric incremented");
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            entries_written: self.entries_written.load(Ordering::Relaxed),
            write_failures: self.write_failures.load(Ordering::Relaxed),
            purges: self.purges.load(Ordering::Relaxed),
            entries_purged: self.entries_purged.load(Ordering::Relaxed),
            recovered: self.recovered.load(Ordering::Relaxed),
            recovery_skipped: self.recovery_skipped.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub entries_written: u64,
    pub write_failures: u64,
    pub purges: u64,
    pub entries_purged: u64,
    pub recovered: u64,
    pub recovery_skipped: u64,
}
