//! Construction-time assembly of an upload manager from configuration.
//!
//! The decision whether the destination endpoint needs signature
//! compensation is made here, once; the resulting transport (wrapped or not)
//! is fixed for the lifetime of the manager.

use std::sync::Arc;

use tracing::info;

use stowage_auth::CredentialProvider;
use stowage_core::UploaderConfig;
use stowage_transport::{CompensationConfig, HttpTransport, SigV4CompensationTransport};

use crate::client::{ClientOptions, ObjectStoreConnector};
use crate::error::UploadResult;
use crate::manager::UploadManager;
use crate::partition::PartitionKeyBuilder;

/// Build an [`UploadManager`] for `config`.
///
/// `metadata` and `file_format` describe the payloads this manager will
/// write and end up embedded in every generated key. `base_transport` is the
/// plain transport the client would otherwise use; it is wrapped with
/// [`SigV4CompensationTransport`] when the endpoint requires it.
///
/// # Errors
///
/// Returns [`UploadError::Config`](crate::error::UploadError::Config) for
/// invalid configuration and propagates connector failures; in both cases no
/// manager is produced.
pub fn build_upload_manager(
    config: &UploaderConfig,
    metadata: impl Into<String>,
    file_format: impl Into<String>,
    credentials: Arc<dyn CredentialProvider>,
    base_transport: Arc<dyn HttpTransport>,
    connector: &dyn ObjectStoreConnector,
) -> UploadResult<UploadManager> {
    config.validate()?;

    let transport: Option<Arc<dyn HttpTransport>> = if config.needs_signature_compensation() {
        info!(
            endpoint = config.endpoint.as_deref().unwrap_or_default(),
            "Installing signature-compensation transport"
        );
        Some(Arc::new(SigV4CompensationTransport::new(
            base_transport,
            CompensationConfig::new(config.region.as_str()),
            credentials,
        )))
    } else {
        None
    };

    let client = connector.connect(ClientOptions {
        region: config.region.clone(),
        endpoint: config.endpoint.clone(),
        force_path_style: config.force_path_style,
        disable_tls: config.disable_tls,
        role_arn: config.role_arn.clone(),
        transport,
    })?;

    let partitioner = PartitionKeyBuilder {
        key_prefix: config.key_prefix.clone(),
        granularity: config.partition,
        file_prefix: config.file_prefix.clone(),
        metadata: metadata.into(),
        file_format: file_format.into(),
        compression: config.compression,
    };

    Ok(UploadManager::new(
        config.bucket.clone(),
        partitioner,
        client,
        config.storage_class,
    ))
}
