//! Partition-key derivation and upload orchestration.
//!
//! A single logical "write payload to storage" operation: derive a
//! time-bucketed destination key, attach the configured storage class, and
//! issue exactly one write through the object-store client capability. The
//! client itself, credential resolution, and retry policy are external
//! collaborators.
//!
//! # Modules
//!
//! - [`client`] - Object-store client and connector capabilities
//! - [`error`] - Upload error types
//! - [`manager`] - The upload manager
//! - [`partition`] - Time-bucketed object-key derivation
//! - [`wiring`] - Construction-time assembly from configuration

pub mod client;
pub mod error;
pub mod manager;
pub mod partition;
pub mod wiring;

pub use client::{ClientOptions, ObjectStoreClient, ObjectStoreConnector};
pub use error::{UploadError, UploadResult};
pub use manager::UploadManager;
pub use partition::PartitionKeyBuilder;
pub use wiring::build_upload_manager;
