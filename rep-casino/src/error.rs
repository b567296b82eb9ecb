//! Error types for casino simulation runs

use rep_core::CoreError;
use rep_store::StoreError;
use thiserror::Error;

/// Errors raised while running or configuring a simulation.
#[derive(Debug, Error)]
pub enum CasinoError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("invalid run configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
