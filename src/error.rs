//! Error types for static-upload
//!
//! Uses `thiserror` for library errors. Every variant is fatal: the batch
//! aborts on the first one and the binary exits non-zero.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::StoreError;

/// Result type alias for static-upload operations
pub type UploadResult<T> = Result<T, UploadError>;

/// Main error type for static-upload operations
#[derive(Error, Debug)]
pub enum UploadError {
    /// The default bucket is shared, so it needs a directory prefix
    #[error("uploading to the default bucket '{bucket}' requires an upload directory (--dir)")]
    MissingDirectory { bucket: String },

    /// Manifest format selector not recognised
    #[error("unsupported manifest format '{format}' (expected one of: json, csv)")]
    UnsupportedFormat { format: String },

    /// Storage credentials could not be obtained from the environment
    #[error("failed to load storage credentials: {message}")]
    MissingCredentials { message: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// A glob pattern in the files list is malformed
    #[error("invalid file pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Directory traversal failed while expanding a pattern
    #[error("failed to expand '{pattern}': {message}")]
    Walk { pattern: String, message: String },

    /// An input file could not be opened
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input path cannot be used as a manifest filename or object key
    #[error("file name is not valid UTF-8: {path}")]
    NonUtf8Path { path: PathBuf },

    /// An input file could not be read while fingerprinting or rewinding
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Remote object store failure (existence check or upload)
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Manifest could not be serialized
    #[error("failed to format manifest: {0}")]
    Serialize(String),

    /// Manifest could not be written to disk
    #[error("failed to write manifest {path}: {source}")]
    WriteManifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
