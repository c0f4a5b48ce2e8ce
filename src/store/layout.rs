/// File layout of a store directory
///
/// - `<dir>/<log_id>.json` -> one LogEntry (JSON)
/// - `<dir>/lastPurge.json` -> last purge timestamp (JSON string)
use std::path::{Path, PathBuf};

pub const ENTRY_EXTENSION: &str = "json";
pub const PURGE_MARKER_FILE: &str = "lastPurge.json";

/// Path of the file holding entry `log_id`.
///
/// Returns `None` when the identifier cannot be used as a plain file name.
pub fn entry_path(dir: &Path, log_id: &str) -> Option<PathBuf> {
    let valid = !log_id.is_empty()
        && log_id != "."
        && log_id != ".."
        && !log_id.contains(['/', '\\'])
        && format!("{}.{}", log_id, ENTRY_EXTENSION) != PURGE_MARKER_FILE;
    valid.then(|| dir.join(format!("{}.{}", log_id, ENTRY_EXTENSION)))
}

pub fn purge_marker_path(dir: &Path) -> PathBuf {
    dir.join(PURGE_MARKER_FILE)
}

/// Whether `path` looks like an entry file (and not the purge marker)
pub fn is_entry_file(path: &Path) -> bool {
    let is_marker = path
        .file_name()
        .is_some_and(|name| name == PURGE_MARKER_FILE);
    let has_extension = path
        .extension()
        .is_some_and(|ext| ext == ENTRY_EXTENSION);
    has_extension && !is_marker && path.is_file()
}
