//! Configuration for the uploader.
//!
//! The full configuration schema (credential chains, exporter wiring) lives in
//! the embedding application; this struct carries only what the upload
//! subsystem itself consumes. Environment-variable overrides follow the same
//! conventions as the rest of the configuration surface.

use crate::error::{StowageError, StowageResult};
use crate::types::{CompressionCodec, PartitionGranularity, StorageClass};

/// The S3-compatibility endpoint of Google Cloud Storage.
///
/// GCS validates SigV4 signatures strictly against the received header set,
/// so requests to it need signature compensation (see `stowage-transport`).
pub const GCS_S3_COMPAT_ENDPOINT: &str = "https://storage.googleapis.com";

/// Uploader configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploaderConfig {
    /// AWS region of the destination bucket.
    pub region: String,
    /// Destination bucket name.
    pub bucket: String,
    /// Key prefix prepended to every generated object key.
    pub key_prefix: String,
    /// Time granularity for the key's partition path segment.
    pub partition: PartitionGranularity,
    /// Prefix of the file-name portion of generated keys.
    pub file_prefix: String,
    /// Storage class attached to every write, passed through unchanged.
    pub storage_class: StorageClass,
    /// Base endpoint override for S3-compatible stores. `None` means the
    /// default AWS endpoint for `region`.
    pub endpoint: Option<String>,
    /// IAM role to assume for writes, if any.
    pub role_arn: Option<String>,
    /// Use path-style addressing (bucket in the URL path) instead of
    /// virtual-hosted style.
    pub force_path_style: bool,
    /// Disable TLS for the endpoint.
    pub disable_tls: bool,
    /// Compression codec the caller applies to payloads.
    pub compression: CompressionCodec,
    /// Whether the endpoint requires signature compensation. When unset, the
    /// decision is inferred from `endpoint` (true only for the known GCS
    /// S3-compatibility endpoint).
    pub signature_compensation: Option<bool>,
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_owned(),
            bucket: String::new(),
            key_prefix: String::new(),
            partition: PartitionGranularity::default(),
            file_prefix: String::new(),
            storage_class: StorageClass::default(),
            endpoint: None,
            role_arn: None,
            force_path_style: false,
            disable_tls: false,
            compression: CompressionCodec::default(),
            signature_compensation: None,
        }
    }
}

impl UploaderConfig {
    /// Load configuration from environment variables, starting from defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("STOWAGE_REGION") {
            config.region = v;
        }
        if let Ok(v) = std::env::var("STOWAGE_BUCKET") {
            config.bucket = v;
        }
        if let Ok(v) = std::env::var("STOWAGE_KEY_PREFIX") {
            config.key_prefix = v;
        }
        if let Ok(v) = std::env::var("STOWAGE_PARTITION") {
            config.partition = PartitionGranularity::from(v.as_str());
        }
        if let Ok(v) = std::env::var("STOWAGE_FILE_PREFIX") {
            config.file_prefix = v;
        }
        if let Ok(v) = std::env::var("STOWAGE_STORAGE_CLASS") {
            config.storage_class = StorageClass::from(v.as_str());
        }
        if let Ok(v) = std::env::var("STOWAGE_ENDPOINT") {
            config.endpoint = Some(v);
        }
        if let Ok(v) = std::env::var("STOWAGE_ROLE_ARN") {
            config.role_arn = Some(v);
        }
        if let Ok(v) = std::env::var("STOWAGE_FORCE_PATH_STYLE") {
            config.force_path_style = v == "1" || v.eq_ignore_ascii_case("true");
        }
        if let Ok(v) = std::env::var("STOWAGE_DISABLE_TLS") {
            config.disable_tls = v == "1" || v.eq_ignore_ascii_case("true");
        }
        if let Ok(v) = std::env::var("STOWAGE_COMPRESSION") {
            config.compression = CompressionCodec::from(v.as_str());
        }
        if let Ok(v) = std::env::var("STOWAGE_SIGNATURE_COMPENSATION") {
            config.signature_compensation = Some(v == "1" || v.eq_ignore_ascii_case("true"));
        }

        config
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StowageError::Config`] if the bucket or region is empty.
    pub fn validate(&self) -> StowageResult<()> {
        if self.bucket.is_empty() {
            return Err(StowageError::Config("bucket must not be empty".to_owned()));
        }
        if self.region.is_empty() {
            return Err(StowageError::Config("region must not be empty".to_owned()));
        }
        Ok(())
    }

    /// Whether requests to the configured endpoint need signature
    /// compensation. An explicit `signature_compensation` setting wins;
    /// otherwise only the known GCS S3-compatibility endpoint needs it.
    #[must_use]
    pub fn needs_signature_compensation(&self) -> bool {
        match self.signature_compensation {
            Some(explicit) => explicit,
            None => self.endpoint.as_deref() == Some(GCS_S3_COMPAT_ENDPOINT),
        }
    }
}
