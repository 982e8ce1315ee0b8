//! Error types for the vis-network binding.

use thiserror::Error;

/// Top-level error type for atlas-vis operations.
#[derive(Error, Debug)]
pub enum VisError {
    /// Graph construction or configuration failure in the core.
    #[error("Core error: {0}")]
    Core(#[from] atlas_core::AtlasError),

    /// JSON encoding of a dataset or embedded value failed.
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic I/O error while writing the page.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, VisError>;
