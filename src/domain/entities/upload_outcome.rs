//! Per-file upload outcome

use std::fmt;

use crate::domain::value_objects::ObjectKey;

/// Why a file was not transferred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// An object already exists at the content-addressed key
    AlreadyPresent,
    /// Dry run: the object is missing and would have been uploaded
    DryRun,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::AlreadyPresent => "already_present",
            SkipReason::DryRun => "dry_run",
        }
    }
}

/// What happened to a single input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Bytes were transferred to the store
    Uploaded,
    /// Nothing was transferred
    Skipped(SkipReason),
}

impl UploadOutcome {
    /// Progress label shown to users
    pub fn label(&self) -> &'static str {
        match self {
            UploadOutcome::Uploaded => "Uploaded",
            UploadOutcome::Skipped(SkipReason::AlreadyPresent) => "Skipped",
            UploadOutcome::Skipped(SkipReason::DryRun) => "Planned",
        }
    }

    /// Whether the file is (or would be, in a dry run) new to the store
    pub fn is_new(&self) -> bool {
        matches!(
            self,
            UploadOutcome::Uploaded | UploadOutcome::Skipped(SkipReason::DryRun)
        )
    }
}

impl fmt::Display for UploadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of processing one input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Filename as given on input (manifest key)
    pub filename: String,
    /// Full object key in the bucket
    pub key: ObjectKey,
    /// Public URL of the object
    pub url: String,
    pub outcome: UploadOutcome,
}
