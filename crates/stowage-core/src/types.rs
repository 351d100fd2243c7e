//! Shared type definitions for the upload subsystem.

use serde::{Deserialize, Serialize};

/// S3 object storage class.
///
/// Opaque to this subsystem: the value is attached to each write request and
/// passed through to the object store unchanged, never inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StorageClass {
    /// Default variant.
    #[default]
    #[serde(rename = "STANDARD")]
    Standard,
    #[serde(rename = "REDUCED_REDUNDANCY")]
    ReducedRedundancy,
    #[serde(rename = "STANDARD_IA")]
    StandardIa,
    #[serde(rename = "ONEZONE_IA")]
    OnezoneIa,
    #[serde(rename = "INTELLIGENT_TIERING")]
    IntelligentTiering,
    #[serde(rename = "GLACIER")]
    Glacier,
    #[serde(rename = "GLACIER_IR")]
    GlacierIr,
    #[serde(rename = "DEEP_ARCHIVE")]
    DeepArchive,
    #[serde(rename = "EXPRESS_ONEZONE")]
    ExpressOnezone,
}

impl StorageClass {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::ReducedRedundancy => "REDUCED_REDUNDANCY",
            Self::StandardIa => "STANDARD_IA",
            Self::OnezoneIa => "ONEZONE_IA",
            Self::IntelligentTiering => "INTELLIGENT_TIERING",
            Self::Glacier => "GLACIER",
            Self::GlacierIr => "GLACIER_IR",
            Self::DeepArchive => "DEEP_ARCHIVE",
            Self::ExpressOnezone => "EXPRESS_ONEZONE",
        }
    }
}

impl std::fmt::Display for StorageClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for StorageClass {
    fn from(s: &str) -> Self {
        match s {
            "REDUCED_REDUNDANCY" => Self::ReducedRedundancy,
            "STANDARD_IA" => Self::StandardIa,
            "ONEZONE_IA" => Self::OnezoneIa,
            "INTELLIGENT_TIERING" => Self::IntelligentTiering,
            "GLACIER" => Self::Glacier,
            "GLACIER_IR" => Self::GlacierIr,
            "DEEP_ARCHIVE" => Self::DeepArchive,
            "EXPRESS_ONEZONE" => Self::ExpressOnezone,
            _ => Self::default(),
        }
    }
}

/// Time granularity used to bucket object keys into path segments.
///
/// Truncation affects only the path segment of the key; the payload and the
/// per-key uniqueness token are never truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartitionGranularity {
    /// No time segment in the key path.
    None,
    /// Bucket by calendar day.
    Day,
    /// Bucket by hour.
    Hour,
    /// Default variant. Bucket by minute.
    #[default]
    Minute,
}

impl PartitionGranularity {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
        }
    }
}

impl std::fmt::Display for PartitionGranularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for PartitionGranularity {
    fn from(s: &str) -> Self {
        match s {
            "none" => Self::None,
            "day" => Self::Day,
            "hour" => Self::Hour,
            _ => Self::default(),
        }
    }
}

/// Compression codec applied to uploaded payloads by the caller.
///
/// The codec determines the file-extension suffix of generated object keys;
/// this subsystem never compresses or decompresses payloads itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionCodec {
    /// Default variant. No compression.
    #[default]
    None,
    /// Gzip-compressed payloads.
    Gzip,
}

impl CompressionCodec {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Gzip => "gzip",
        }
    }

    /// File-extension suffix appended after the format extension.
    #[must_use]
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Gzip => ".gz",
        }
    }
}

impl std::fmt::Display for CompressionCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for CompressionCodec {
    fn from(s: &str) -> Self {
        match s {
            "gzip" => Self::Gzip,
            _ => Self::default(),
        }
    }
}
