//! Projection error types.

use thiserror::Error;

/// Errors that can occur while projecting a family.
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// The external engine failed the run.
    #[error("Engine error: {0}")]
    Engine(String),

    /// Failed to serialize the family or parse the engine's response.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for projection operations.
pub type Result<T> = std::result::Result<T, ProjectionError>;
