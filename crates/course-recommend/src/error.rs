//! Recommendation error types.

use thiserror::Error;

/// Errors that can occur while producing recommendations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecommendError {
    /// No catalog record has exactly this title
    #[error("Title not found: {0}")]
    TitleNotFound(String),

    /// Catalog and similarity matrix disagree on row count
    #[error("Catalog has {catalog} rows but similarity matrix has {matrix}")]
    DimensionMismatch { catalog: usize, matrix: usize },
}
