//! End-to-end upload flow tests.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bytes::Bytes;

    use stowage_core::UploaderConfig;
    use stowage_core::config::GCS_S3_COMPAT_ENDPOINT;
    use stowage_core::types::PartitionGranularity;
    use stowage_transport::HttpTransport;
    use stowage_upload::{UploadError, build_upload_manager};

    use crate::{SdkLikeConnector, StrictEndpoint, TEST_ACCESS_KEY, TEST_SECRET_KEY};
    use stowage_auth::credentials::{Credentials, StaticCredentialProvider};

    fn credentials() -> Arc<StaticCredentialProvider> {
        Arc::new(StaticCredentialProvider::new(Credentials::new(
            TEST_ACCESS_KEY,
            TEST_SECRET_KEY,
        )))
    }

    fn gcs_config() -> UploaderConfig {
        UploaderConfig {
            bucket: "telemetry".to_owned(),
            key_prefix: "logs".to_owned(),
            partition: PartitionGranularity::Hour,
            endpoint: Some(GCS_S3_COMPAT_ENDPOINT.to_owned()),
            ..UploaderConfig::default()
        }
    }

    #[tokio::test]
    async fn test_should_upload_to_strict_endpoint_with_compensation() {
        let endpoint = Arc::new(StrictEndpoint::default());
        let connector = SdkLikeConnector {
            endpoint_transport: endpoint.clone(),
        };

        let manager = build_upload_manager(
            &gcs_config(),
            "logs",
            "json",
            credentials(),
            endpoint.clone() as Arc<dyn HttpTransport>,
            &connector,
        )
        .unwrap();

        manager
            .upload(Bytes::from_static(b"{\"severity\":\"info\"}"))
            .await
            .unwrap();

        let objects = endpoint.objects.lock().unwrap();
        assert_eq!(objects.len(), 1);
        let ((bucket, key), body) = objects.iter().next().unwrap();
        assert_eq!(bucket, "telemetry");
        assert!(key.starts_with("logs/year="), "key: {key}");
        assert!(key.contains("/hour="), "key: {key}");
        assert!(key.ends_with(".json"), "key: {key}");
        assert_eq!(body.as_ref(), b"{\"severity\":\"info\"}");
    }

    #[tokio::test]
    async fn test_should_write_distinct_keys_for_repeated_uploads() {
        let endpoint = Arc::new(StrictEndpoint::default());
        let connector = SdkLikeConnector {
            endpoint_transport: endpoint.clone(),
        };

        let manager = build_upload_manager(
            &gcs_config(),
            "logs",
            "json",
            credentials(),
            endpoint.clone() as Arc<dyn HttpTransport>,
            &connector,
        )
        .unwrap();

        let payload = Bytes::from_static(b"same payload");
        manager.upload(payload.clone()).await.unwrap();
        manager.upload(payload).await.unwrap();

        let objects = endpoint.objects.lock().unwrap();
        assert_eq!(objects.len(), 2, "second write must not overwrite the first");
    }

    #[tokio::test]
    async fn test_should_be_rejected_by_strict_endpoint_without_compensation() {
        let endpoint = Arc::new(StrictEndpoint::default());
        let connector = SdkLikeConnector {
            endpoint_transport: endpoint.clone(),
        };

        // No endpoint override: compensation is not installed, so the
        // post-signing Accept-Encoding mutation reaches the strict verifier.
        let config = UploaderConfig {
            endpoint: None,
            ..gcs_config()
        };

        let manager = build_upload_manager(
            &config,
            "logs",
            "json",
            credentials(),
            endpoint.clone() as Arc<dyn HttpTransport>,
            &connector,
        )
        .unwrap();

        let err = manager.upload(Bytes::from_static(b"{}")).await.unwrap_err();
        assert!(matches!(err, UploadError::Store(_)));
        assert!(err.to_string().contains("403"), "err: {err}");
        assert!(endpoint.objects.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_should_honor_explicit_compensation_flag_for_other_providers() {
        let endpoint = Arc::new(StrictEndpoint::default());
        let connector = SdkLikeConnector {
            endpoint_transport: endpoint.clone(),
        };

        // A non-GCS strict provider, opted in via configuration rather than
        // an endpoint-URL match.
        let config = UploaderConfig {
            endpoint: Some("https://strict-store.internal:9000".to_owned()),
            signature_compensation: Some(true),
            ..gcs_config()
        };

        let manager = build_upload_manager(
            &config,
            "logs",
            "json",
            credentials(),
            endpoint.clone() as Arc<dyn HttpTransport>,
            &connector,
        )
        .unwrap();

        manager.upload(Bytes::from_static(b"{}")).await.unwrap();
        assert_eq!(endpoint.objects.lock().unwrap().len(), 1);
    }
}
