use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to create store directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No such LogEntry exists with id: {0}")]
    NotFound(String),

    #[error("A limit greater than 0 must be passed to get(), got {0}")]
    InvalidLimit(usize),

    #[error("This log only prints entries, it does not store any log data")]
    NoStorage,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
