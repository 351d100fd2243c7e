//! HTTP transport abstraction and SigV4 signature compensation.
//!
//! Some transport layers sitting below the object-store client rewrite
//! request headers (notably `Accept-Encoding`) after the SigV4 signature has
//! been computed. AWS's own S3 endpoint tolerates the discrepancy; stricter
//! S3-compatible endpoints such as GCS validate the signature against the
//! header set actually received and reject the request.
//!
//! [`SigV4CompensationTransport`] is a round-trip decorator that repairs such
//! requests: it strips the mutated and signature-bound headers, re-signs over
//! the remaining set, restores `Accept-Encoding` after signing, and forwards
//! the request unchanged otherwise.
//!
//! # Modules
//!
//! - [`compensate`] - The signature-compensation decorator
//! - [`error`] - Transport error types
//! - [`transport`] - The round-trip capability trait

pub mod compensate;
pub mod error;
pub mod transport;

pub use compensate::{CompensationConfig, SigV4CompensationTransport, Strictness};
pub use error::TransportError;
pub use transport::HttpTransport;
