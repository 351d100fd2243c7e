//! Core types, configuration, and errors for the stowage upload subsystem.
//!
//! This crate holds everything the other stowage crates share: the uploader
//! configuration surface, the storage-tiering and partitioning enums, and the
//! core error type.
//!
//! # Modules
//!
//! - [`config`] - Uploader configuration with env-var overrides and validation
//! - [`error`] - Core error types
//! - [`types`] - Storage class, partition granularity, and compression enums

pub mod config;
pub mod error;
pub mod types;

pub use config::UploaderConfig;
pub use error::{StowageError, StowageResult};
pub use types::{CompressionCodec, PartitionGranularity, StorageClass};
