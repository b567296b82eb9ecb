//! Error types for statistics aggregation

use rep_core::CoreError;
use rep_store::StoreError;
use thiserror::Error;

/// Errors raised while aggregating or presenting statistics.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("statistics with name {0:?} already exists")]
    DuplicateName(String),

    #[error("statistics with name {0:?} not found")]
    NotFound(String),

    #[error("no presentation manager configured")]
    MissingPresenter,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
