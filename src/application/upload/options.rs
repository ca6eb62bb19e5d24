//! Upload Options

use std::path::PathBuf;

use crate::domain::services::UrlResolver;
use crate::error::{UploadError, UploadResult};

/// Options for one upload batch
#[derive(Debug, Clone, Default)]
pub struct UploadOptions {
    /// Target bucket
    pub bucket: String,
    /// Remote directory prefix joined in front of every key
    pub directory: String,
    /// Input files, processed in order
    pub files: Vec<PathBuf>,
    /// Check the store and report outcomes without transferring anything
    pub dry_run: bool,
}

impl UploadOptions {
    pub fn new(bucket: impl Into<String>, directory: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            directory: directory.into(),
            ..Self::default()
        }
    }

    pub fn with_files(mut self, files: Vec<PathBuf>) -> Self {
        self.files = files;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Whether a non-empty directory prefix was given
    pub fn has_directory(&self) -> bool {
        !self.directory.trim_matches('/').trim().is_empty()
    }

    /// Reject options that would write into the root of the shared default
    /// bucket. Runs before any store access.
    pub fn validate(&self, resolver: &UrlResolver) -> UploadResult<()> {
        if resolver.is_default_bucket(&self.bucket) && !self.has_directory() {
            return Err(UploadError::MissingDirectory {
                bucket: self.bucket.clone(),
            });
        }
        Ok(())
    }
}
