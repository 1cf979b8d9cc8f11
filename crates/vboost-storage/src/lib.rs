//! S3-compatible object store client.
//!
//! This crate provides:
//! - Store configuration from a connection credential string or environment
//! - File/byte upload with overwrite-on-collision semantics
//! - Deterministic public URL construction
//! - The `ObjectStore` trait seam used by the pipeline

pub mod client;
pub mod config;
pub mod error;
pub mod traits;

pub use client::{content_type_for, BlobClient};
pub use config::StoreConfig;
pub use error::{StorageError, StorageResult};
pub use traits::ObjectStore;
