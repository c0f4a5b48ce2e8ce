//! Console rendering of log entries on a dedicated worker thread.
//!
//! A [`ConsoleSink`] owns one consumer thread and an unbounded queue. Loggers
//! hold a cloned [`DisplayHandle`] and only ever enqueue, so rendering never
//! blocks a write and never touches the store lock. Entries are rendered in
//! the order they were submitted.
//!
//! ```rust,no_run
//! use logbox::display::ConsoleSink;
//! use logbox::logger::Logger;
//!
//! let sink = ConsoleSink::stdout(1);
//! let log = Logger::dev_null().with_display(sink.handle());
//! log.info("visible on stdout");
//! sink.shutdown();
//! ```

use std::io::{self, Write};
use std::thread::{self, JoinHandle};

use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use tokio::sync::mpsc;
use tracing::warn;

use crate::entry::{Level, LogEntry};

const LEVEL_WIDTH: usize = "CRITICAL".len();

enum DisplayMessage {
    Entry(LogEntry),
    Stop,
}

/// Cloneable sender side of a [`ConsoleSink`]
#[derive(Clone)]
pub struct DisplayHandle {
    tx: mpsc::UnboundedSender<DisplayMessage>,
}

impl DisplayHandle {
    /// Queue an entry for rendering. Never blocks; a stopped sink drops it.
    pub fn send(&self, entry: LogEntry) {
        let _ = self.tx.send(DisplayMessage::Entry(entry));
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Owner of the rendering thread
pub struct ConsoleSink {
    tx: mpsc::UnboundedSender<DisplayMessage>,
    worker: Option<JoinHandle<()>>,
}

impl ConsoleSink {
    /// Start a worker rendering into `writer`, followed by `line_spacing`
    /// blank lines per entry
    pub fn start<W>(writer: W, line_spacing: usize) -> Self
    where
        W: Write + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let worker = thread::Builder::new()
            .name("logbox-display".to_string())
            .spawn(move || run_worker(rx, writer, line_spacing));

        let worker = match worker {
            Ok(worker) => Some(worker),
            Err(e) => {
                warn!(error = %e, "Failed to spawn display worker, entries will not be shown");
                None
            }
        };

        Self { tx, worker }
    }

    pub fn stdout(line_spacing: usize) -> Self {
        Self::start(io::stdout(), line_spacing)
    }

    pub fn handle(&self) -> DisplayHandle {
        DisplayHandle {
            tx: self.tx.clone(),
        }
    }

    /// Render everything queued so far, then stop the worker
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };

        let _ = self.tx.send(DisplayMessage::Stop);
        if worker.join().is_err() {
            warn!("Display worker panicked");
        }
    }
}

impl Drop for ConsoleSink {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_worker<W: Write>(mut rx: mpsc::UnboundedReceiver<DisplayMessage>, mut writer: W, line_spacing: usize) {
    while let Some(message) = rx.blocking_recv() {
        let entry = match message {
            DisplayMessage::Entry(entry) => entry,
            DisplayMessage::Stop => break,
        };

        if let Err(e) = render(&mut writer, &entry, line_spacing) {
            // Nothing useful to do if the terminal is gone
            warn!(error = %e, "Failed to render log entry");
        }
    }
}

/// Write one entry as `HH:MM:SS.ff LEVEL    message`
pub fn render<W: Write>(writer: &mut W, entry: &LogEntry, line_spacing: usize) -> io::Result<()> {
    writeln!(
        writer,
        "{} {} {}",
        format_time(entry.time),
        level_tag(entry.level),
        entry.message
    )?;
    for _ in 0..line_spacing {
        writeln!(writer)?;
    }
    writer.flush()
}

fn format_time(time: DateTime<Utc>) -> String {
    format!(
        "{}.{:02}",
        time.format("%H:%M:%S"),
        time.timestamp_subsec_millis() / 10
    )
}

fn level_tag(level: Level) -> ColoredString {
    let padded = format!("{:<width$}", level.as_str(), width = LEVEL_WIDTH);
    match level {
        Level::Info => padded.cyan().bold(),
        Level::Warning => padded.yellow().bold(),
        Level::Error => padded.red().bold(),
        Level::Critical => padded.black().on_red(),
        Level::Any => padded.normal(),
    }
}
