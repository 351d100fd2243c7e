//! Signing error types.

/// Errors raised while signing an outgoing request.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The credential source failed to produce credentials.
    #[error("failed to retrieve credentials: {0}")]
    Retrieve(String),

    /// The request carries no host, so no canonical request can be built.
    #[error("request has no host header and no authority in its URI")]
    MissingHost,

    /// A request timestamp could not be parsed.
    #[error("invalid request timestamp: {0}")]
    InvalidTimestamp(String),

    /// A computed header value was not a valid HTTP header value.
    #[error("invalid value for header {0}")]
    InvalidHeaderValue(String),
}
