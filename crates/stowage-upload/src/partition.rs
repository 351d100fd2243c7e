//! Time-bucketed object-key derivation.
//!
//! Keys are built from the configured prefix, a Hive-style time path segment
//! truncated to the partition granularity, and a file name carrying a
//! per-call uniqueness token:
//!
//! ```text
//! {key_prefix}/year=2024/month=01/day=01/hour=10/{file_prefix}{metadata}_{token}.json.gz
//! ```
//!
//! Two keys generated in the same time bucket share the whole path segment
//! and differ only in the token, so downstream range listings see one
//! partition per bucket while repeated writes never overwrite each other.

use chrono::{DateTime, Datelike, Timelike, Utc};
use uuid::Uuid;

use stowage_core::types::{CompressionCodec, PartitionGranularity};

/// Pure key builder; immutable once constructed.
#[derive(Debug, Clone)]
pub struct PartitionKeyBuilder {
    /// Prefix prepended to every key, may be empty.
    pub key_prefix: String,
    /// Time granularity of the path segment.
    pub granularity: PartitionGranularity,
    /// Prefix of the file-name portion.
    pub file_prefix: String,
    /// Metadata tag embedded in the file name (e.g. a telemetry signal name).
    pub metadata: String,
    /// File format, used as the extension (e.g. `json`).
    pub file_format: String,
    /// Compression codec, appended as an extension suffix.
    pub compression: CompressionCodec,
}

impl PartitionKeyBuilder {
    /// Derive a fresh object key for `timestamp`.
    ///
    /// Total function: every timestamp yields a key. Each call injects a new
    /// uniqueness token, so repeated calls in the same bucket never collide.
    #[must_use]
    pub fn key(&self, timestamp: DateTime<Utc>) -> String {
        let token = Uuid::new_v4().simple().to_string();
        let file_name = format!(
            "{}{}_{token}.{}{}",
            self.file_prefix,
            self.metadata,
            self.file_format,
            self.compression.suffix()
        );

        let mut segments: Vec<String> = Vec::with_capacity(3);
        if !self.key_prefix.is_empty() {
            segments.push(self.key_prefix.clone());
        }
        if let Some(bucket) = self.bucket_segment(timestamp) {
            segments.push(bucket);
        }
        segments.push(file_name);
        segments.join("/")
    }

    /// The time-bucket path segment for `timestamp`, truncated to the
    /// configured granularity. `None` granularity contributes no segment.
    #[must_use]
    pub fn bucket_segment(&self, timestamp: DateTime<Utc>) -> Option<String> {
        let date = format!(
            "year={:04}/month={:02}/day={:02}",
            timestamp.year(),
            timestamp.month(),
            timestamp.day()
        );
        match self.granularity {
            PartitionGranularity::None => None,
            PartitionGranularity::Day => Some(date),
            PartitionGranularity::Hour => Some(format!("{date}/hour={:02}", timestamp.hour())),
            PartitionGranularity::Minute => Some(format!(
                "{date}/hour={:02}/minute={:02}",
                timestamp.hour(),
                timestamp.minute()
            )),
        }
    }
}
