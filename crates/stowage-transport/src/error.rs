//! Transport error types.

use stowage_auth::AuthError;

/// Errors raised while sending a request through a transport chain.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Re-signing the request failed.
    #[error("failed to re-sign request: {0}")]
    Signing(#[from] AuthError),

    /// A request header could not be processed.
    #[error("invalid request header {0}")]
    Header(String),

    /// The underlying connection failed.
    #[error(transparent)]
    Connection(#[from] anyhow::Error),
}
