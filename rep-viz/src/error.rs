//! Error types for presentation back ends

use thiserror::Error;

/// Errors related to view rendering and chart export
#[derive(Debug, Error)]
pub enum VizError {
    #[error("Invalid chart configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Rendering error: {0}")]
    RenderingError(String),

    #[error("Export failed: {0}")]
    ExportFailed(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
