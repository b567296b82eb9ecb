//! Error types for replication storage

use rep_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while managing replication directories.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to create replication directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("index {index} out of range (count: {count})")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("replication not found: {0}")]
    ReplicationNotFound(String),

    #[error("invalid batch range: end {end} is less than start {start}")]
    InvalidRange { start: u64, end: u64 },

    #[error("failed processing replication directory {0:?}: no trailing replication number")]
    Discovery(String),
}
