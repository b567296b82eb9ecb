//! Error types for channel persistence

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by transports, codecs, and the writer/reader engines.
///
/// End-of-stream is deliberately *not* an error: transports and readers
/// report it as `Ok(None)` so a clean EOF can never be confused with a
/// truncated or malformed file.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("no file path configured")]
    PathUnset,

    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed data: {0}")]
    Format(String),
}
