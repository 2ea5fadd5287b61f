//! Error types for the course finder.

use thiserror::Error;

/// Unified error type for shared course operations.
#[derive(Debug, Error)]
pub enum CourseError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
