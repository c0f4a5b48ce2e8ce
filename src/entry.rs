//! Log entry model and its on-disk JSON encoding.
//!
//! Every entry is written to its own file as a single JSON object:
//!
//! ```json
//! {
//!   "logId": "0192f3c2-6b1e-7c1a-9a55-3f8a2b1c4d5e",
//!   "time": "2026-10-19T10:02:00Z",
//!   "level": "INFO",
//!   "message": "server listening on port 8080"
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Severity of a log entry.
///
/// `Any` is only meaningful as a query filter; entries are never created with it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    #[default]
    Any,
    Info,
    Warning,
    Error,
    Critical,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Any => "ANY",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }

    /// Whether an entry of level `other` passes this level used as a filter.
    pub fn matches(&self, other: Level) -> bool {
        *self == Level::Any || *self == other
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("Unknown log level: {0}")]
pub struct ParseLevelError(String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ANY" => Ok(Level::Any),
            "INFO" => Ok(Level::Info),
            "WARNING" => Ok(Level::Warning),
            "ERROR" => Ok(Level::Error),
            "CRITICAL" => Ok(Level::Critical),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// One immutable, timestamped and leveled log record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub log_id: String,
    pub time: DateTime<Utc>,
    pub level: Level,
    pub message: String,
}

impl LogEntry {
    /// Create an entry with a fresh time-sortable identifier
    pub fn new(time: DateTime<Utc>, level: Level, message: impl Into<String>) -> Self {
        Self {
            log_id: Uuid::now_v7().to_string(),
            time,
            level,
            message: message.into(),
        }
    }

    pub fn encode(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    pub fn decode(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_wire_field_names() {
        let entry = LogEntry {
            log_id: "abc".to_string(),
            time: Utc.with_ymd_and_hms(2026, 10, 19, 10, 2, 0).unwrap(),
            level: Level::Warning,
            message: "disk almost full".to_string(),
        };

        let value: serde_json::Value = serde_json::from_slice(&entry.encode().unwrap()).unwrap();
        assert_eq!(value["logId"], "abc");
        assert_eq!(value["level"], "WARNING");
        assert_eq!(value["message"], "disk almost full");
        assert_eq!(value["time"], "2026-10-19T10:02:00Z");
    }

    #[test]
    fn test_decode_foreign_document() {
        let raw = br#"{"logId":"x1","time":"2026-10-19T08:00:00.123456789Z","level":"CRITICAL","message":"boom"}"#;
        let entry = LogEntry::decode(raw).unwrap();
        assert_eq!(entry.log_id, "x1");
        assert_eq!(entry.level, Level::Critical);
        assert_eq!(entry.time.timestamp_subsec_nanos(), 123_456_789);
    }

    #[test]
    fn test_decode_rejects_unknown_level() {
        let raw = br#"{"logId":"x1","time":"2026-10-19T08:00:00Z","level":"DEBUG","message":"boom"}"#;
        assert!(LogEntry::decode(raw).is_err());
    }

    #[test]
    fn test_new_entries_get_distinct_ids() {
        let now = Utc::now();
        let a = LogEntry::new(now, Level::Info, "a");
        let b = LogEntry::new(now, Level::Info, "b");
        assert_ne!(a.log_id, b.log_id);
    }

    #[test]
    fn test_level_parse_and_filter() {
        assert_eq!("info".parse::<Level>().unwrap(), Level::Info);
        assert_eq!(" Critical ".parse::<Level>().unwrap(), Level::Critical);
        assert!("verbose".parse::<Level>().is_err());

        assert!(Level::Any.matches(Level::Error));
        assert!(Level::Error.matches(Level::Error));
        assert!(!Level::Error.matches(Level::Info));
        assert_eq!(Level::default(), Level::Any);
    }
}
