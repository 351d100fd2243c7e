//! The round-trip capability trait.

use bytes::Bytes;

use crate::error::TransportError;

/// A single HTTP exchange: send a request, receive a response.
///
/// Implementations must be safe for concurrent use by many in-flight
/// requests; decorators in a chain hold only immutable configuration and a
/// reference to the next transport.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send `req` and return the response.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the request could not be sent or a
    /// decorator in the chain failed to process it.
    async fn round_trip(
        &self,
        req: http::Request<Bytes>,
    ) -> Result<http::Response<Bytes>, TransportError>;
}
