//! The upload manager.

use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use tracing::debug;

use stowage_core::StorageClass;

use crate::client::ObjectStoreClient;
use crate::error::UploadResult;
use crate::partition::PartitionKeyBuilder;

/// Orchestrates a single logical "write payload to storage" operation.
///
/// Each [`upload`](Self::upload) call derives a fresh key and issues exactly
/// one write with the manager's fixed storage class. Per-call failures
/// propagate unchanged; there is no retry or partial-write recovery at this
/// layer. All state is immutable after construction, so the manager is safe
/// to share across concurrent callers.
pub struct UploadManager {
    bucket: String,
    partitioner: PartitionKeyBuilder,
    client: Arc<dyn ObjectStoreClient>,
    storage_class: StorageClass,
}

impl UploadManager {
    /// Wire a manager from its collaborators.
    #[must_use]
    pub fn new(
        bucket: impl Into<String>,
        partitioner: PartitionKeyBuilder,
        client: Arc<dyn ObjectStoreClient>,
        storage_class: StorageClass,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            partitioner,
            client,
            storage_class,
        }
    }

    /// Write `payload` to a freshly derived key in the configured bucket.
    ///
    /// # Errors
    ///
    /// Propagates the object store's error verbatim.
    pub async fn upload(&self, payload: Bytes) -> UploadResult<()> {
        let key = self.partitioner.key(Utc::now());
        debug!(
            bucket = %self.bucket,
            key = %key,
            size = payload.len(),
            storage_class = %self.storage_class,
            "Uploading object"
        );
        self.client
            .put_object(&self.bucket, &key, payload, self.storage_class)
            .await
    }
}

impl std::fmt::Debug for UploadManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadManager")
            .field("bucket", &self.bucket)
            .field("partitioner", &self.partitioner)
            .field("storage_class", &self.storage_class)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use stowage_core::types::{CompressionCodec, PartitionGranularity};

    use super::*;
    use crate::error::UploadError;

    /// Records every write it receives.
    #[derive(Debug, Default)]
    struct RecordingStore {
        writes: Mutex<Vec<(String, String, Bytes, StorageClass)>>,
    }

    #[async_trait::async_trait]
    impl ObjectStoreClient for RecordingStore {
        async fn put_object(
            &self,
            bucket: &str,
            key: &str,
            body: Bytes,
            storage_class: StorageClass,
        ) -> Result<(), UploadError> {
            self.writes.lock().unwrap().push((
                bucket.to_owned(),
                key.to_owned(),
                body,
                storage_class,
            ));
            Ok(())
        }
    }

    /// Fails every write.
    #[derive(Debug)]
    struct BrokenStore;

    #[async_trait::async_trait]
    impl ObjectStoreClient for BrokenStore {
        async fn put_object(
            &self,
            _bucket: &str,
            _key: &str,
            _body: Bytes,
            _storage_class: StorageClass,
        ) -> Result<(), UploadError> {
            Err(UploadError::Store(anyhow::anyhow!("SlowDown: reduce rate")))
        }
    }

    fn partitioner() -> PartitionKeyBuilder {
        PartitionKeyBuilder {
            key_prefix: "logs".to_owned(),
            granularity: PartitionGranularity::Hour,
            file_prefix: String::new(),
            metadata: "logs".to_owned(),
            file_format: "json".to_owned(),
            compression: CompressionCodec::None,
        }
    }

    #[tokio::test]
    async fn test_should_issue_exactly_one_write_per_upload() {
        let store = Arc::new(RecordingStore::default());
        let manager = UploadManager::new(
            "telemetry",
            partitioner(),
            store.clone(),
            StorageClass::StandardIa,
        );

        manager.upload(Bytes::from_static(b"{}")).await.unwrap();

        let writes = store.writes.lock().unwrap();
        assert_eq!(writes.len(), 1);
        let (bucket, key, body, storage_class) = &writes[0];
        assert_eq!(bucket, "telemetry");
        assert!(key.starts_with("logs/year="));
        assert_eq!(body.as_ref(), b"{}");
        assert_eq!(*storage_class, StorageClass::StandardIa);
    }

    #[tokio::test]
    async fn test_should_write_distinct_keys_for_identical_payloads() {
        let store = Arc::new(RecordingStore::default());
        let manager = UploadManager::new(
            "telemetry",
            partitioner(),
            store.clone(),
            StorageClass::Standard,
        );

        manager.upload(Bytes::from_static(b"same")).await.unwrap();
        manager.upload(Bytes::from_static(b"same")).await.unwrap();

        let writes = store.writes.lock().unwrap();
        assert_eq!(writes.len(), 2);
        assert_ne!(writes[0].1, writes[1].1, "no overwrite within a bucket");
    }

    #[tokio::test]
    async fn test_should_propagate_store_errors_unchanged() {
        let manager = UploadManager::new(
            "telemetry",
            partitioner(),
            Arc::new(BrokenStore),
            StorageClass::Standard,
        );

        let err = manager.upload(Bytes::new()).await.unwrap_err();
        assert!(matches!(err, UploadError::Store(_)));
        assert!(err.to_string().contains("SlowDown"));
    }
}
