//! Error types for the stowage core.

/// Core error type for stowage infrastructure.
#[derive(Debug, thiserror::Error)]
pub enum StowageError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal error with context.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Convenience result type for stowage operations.
pub type StowageResult<T> = Result<T, StowageError>;
