//! Request and response shapes for the log query endpoints.
//!
//! - `GET /logs?before=2026-10-19T10:06:00Z&level=INFO&limit=10` returns a JSON
//!   array of entries, most recent first
//! - `GET /logs/{log_id}` returns one entry
//!
//! Entries use the same JSON shape as the files on disk.

use serde::{Deserialize, Serialize};

/// Query string of `GET /logs`
///
/// Fields stay raw strings so malformed values are reported as JSON errors
/// by the handler.
#[derive(Debug, Default, Deserialize)]
pub struct LogQuery {
    /// Exclusive upper time bound (RFC 3339), defaults to now
    pub before: Option<String>,
    /// Level name (case-insensitive), defaults to ANY
    pub level: Option<String>,
    /// Maximum number of entries, defaults to the configured limit
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
