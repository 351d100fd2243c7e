//! Object-store client and connector capabilities.
//!
//! The actual S3-compatible client lives outside this workspace. This module
//! defines the seam it plugs into: the per-write [`ObjectStoreClient`]
//! capability and the construction-time [`ObjectStoreConnector`] factory,
//! along with everything the client needs to know ([`ClientOptions`]),
//! including the optionally compensation-wrapped HTTP transport.

use std::sync::Arc;

use bytes::Bytes;

use stowage_core::StorageClass;
use stowage_transport::HttpTransport;

use crate::error::UploadError;

/// A durable object-store write.
#[async_trait::async_trait]
pub trait ObjectStoreClient: Send + Sync {
    /// Write `body` to `bucket` under `key` with the given storage class.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::Store`] if the store rejects or fails the
    /// write. Retry and timeout policy belong to the implementation.
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        storage_class: StorageClass,
    ) -> Result<(), UploadError>;
}

/// Connection options handed to the client factory at construction time.
#[derive(Clone)]
pub struct ClientOptions {
    /// AWS region for signing and endpoint resolution.
    pub region: String,
    /// Base endpoint override; `None` means the default AWS endpoint.
    pub endpoint: Option<String>,
    /// Use path-style addressing (bucket in the URL path).
    pub force_path_style: bool,
    /// Disable TLS for the endpoint.
    pub disable_tls: bool,
    /// IAM role to assume for writes, if any.
    pub role_arn: Option<String>,
    /// Custom HTTP transport the client must send through. Set when the
    /// endpoint requires signature compensation; `None` means the client's
    /// own default transport, with requests passing through unmodified.
    pub transport: Option<Arc<dyn HttpTransport>>,
}

impl std::fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientOptions")
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("force_path_style", &self.force_path_style)
            .field("disable_tls", &self.disable_tls)
            .field("role_arn", &self.role_arn)
            .field("transport", &self.transport.as_ref().map(|_| "..."))
            .finish()
    }
}

/// Construction-time factory for object-store clients.
pub trait ObjectStoreConnector: Send + Sync {
    /// Build a client for `options`.
    ///
    /// # Errors
    ///
    /// Returns an [`UploadError`] if the client cannot be constructed
    /// (bad region or credentials configuration). This is a construction
    /// error: no client, no manager.
    fn connect(&self, options: ClientOptions) -> Result<Arc<dyn ObjectStoreClient>, UploadError>;
}
