//! Upload error types.

use stowage_core::StowageError;

/// Errors raised while constructing an upload manager or writing an object.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// Invalid configuration; no manager is produced.
    #[error("configuration error: {0}")]
    Config(String),

    /// The object store rejected or failed the write.
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Convenience result type for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;

impl From<StowageError> for UploadError {
    fn from(err: StowageError) -> Self {
        match err {
            StowageError::Config(msg) => Self::Config(msg),
            StowageError::Internal(err) => Self::Store(err),
        }
    }
}
