//! Dataset loading error types.

use thiserror::Error;

/// Errors that can occur while loading the course dataset.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Dataset file could not be read
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV structure error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Required columns are absent after alias normalization
    #[error("Dataset missing required columns: {missing:?}. Available: {available:?}")]
    MissingColumns {
        missing: Vec<String>,
        available: Vec<String>,
    },
}
