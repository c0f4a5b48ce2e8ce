use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use tracing::debug;

use super::{
    error::ApiError,
    models::{HealthResponse, LogQuery},
    state::AppState,
};
use crate::entry::{Level, LogEntry};

/// Recent log entries (GET /logs)
///
/// Returns at most `limit` entries strictly older than `before`, most recent
/// first, optionally filtered by `level`. A missing `before` means "now" and a
/// missing `limit` falls back to `server.default_limit`.
pub async fn list_logs(
    State(state): State<AppState>,
    Query(query): Query<LogQuery>,
) -> Result<Json<Vec<LogEntry>>, ApiError> {
    let before = match query.before.as_deref() {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|time| time.with_timezone(&Utc))
            .map_err(|e| ApiError::InvalidArgument(format!("invalid before {raw:?}: {e}")))?,
        None => state.log.now(),
    };

    let level = match query.level.as_deref() {
        Some(raw) => raw
            .parse::<Level>()
            .map_err(|e| ApiError::InvalidArgument(e.to_string()))?,
        None => Level::Any,
    };

    let limit = match query.limit.as_deref() {
        Some(raw) => parse_limit(raw)?,
        None => state.config.server.default_limit,
    };

    let entries = state.log.get(before, level, limit)?;
    debug!(%before, %level, limit, returned = entries.len(), "Served log query");
    Ok(Json(entries))
}

fn parse_limit(raw: &str) -> Result<usize, ApiError> {
    let limit: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ApiError::InvalidArgument(format!("limit must be an integer, got {raw:?}")))?;
    if limit <= 0 {
        return Err(ApiError::InvalidArgument(format!(
            "limit must be greater than 0, got {limit}"
        )));
    }
    Ok(usize::try_from(limit).unwrap_or(usize::MAX))
}

/// Single log entry by identifier (GET /logs/{log_id})
pub async fn get_log(
    State(state): State<AppState>,
    Path(log_id): Path<String>,
) -> Result<Json<LogEntry>, ApiError> {
    let entry = state.log.get_by_id(&log_id)?;
    Ok(Json(entry))
}

/// Health check endpoint (GET /health)
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
