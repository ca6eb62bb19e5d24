//! ObjectStore port - abstraction over the remote bucket
//!
//! The upload use case talks to storage only through this trait, so tests
//! can substitute an in-memory store for S3.

use std::fs::File;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::value_objects::ObjectKey;

/// Result type for object store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Object store operation errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// Metadata query failed for a reason other than "not found"
    #[error("failed to check s3://{bucket}/{key}: {message}")]
    Head {
        bucket: String,
        key: String,
        message: String,
    },

    /// Transfer failed (network, auth, or storage side)
    #[error("failed to upload s3://{bucket}/{key}: {message}")]
    Put {
        bucket: String,
        key: String,
        message: String,
    },
}

/// Metadata for a single object upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectPut {
    pub bucket: String,
    pub key: ObjectKey,
    /// `None` when the extension has no known MIME type
    pub content_type: Option<String>,
    pub cache_control: String,
    pub expires: DateTime<Utc>,
}

/// Abstract remote object store
///
/// Implementations:
/// - `S3ObjectStore` - AWS SDK backed, any S3-compatible endpoint
/// - `MemoryObjectStore` - in-memory for testing
pub trait ObjectStore: Send + Sync {
    /// Check whether an object exists at `key`.
    ///
    /// A missing object is `Ok(false)`; anything else that goes wrong is an error.
    fn exists(&self, bucket: &str, key: &ObjectKey) -> StoreResult<bool>;

    /// Upload everything from the current position of `body` to EOF.
    ///
    /// No cleanup is attempted if the transfer fails part-way.
    fn put(&self, object: &ObjectPut, body: File) -> StoreResult<()>;
}
