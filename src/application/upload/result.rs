//! Upload Report
//!
//! Result types for upload batches.

use crate::domain::entities::{FileRecord, Manifest, SkipReason, UploadOutcome};

/// Result of a completed upload batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadReport {
    /// Per-file records in input order
    pub records: Vec<FileRecord>,
    /// Filename → URL mapping for every processed file
    pub manifest: Manifest,
}

impl UploadReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a processed file to the report and the manifest
    pub fn record(&mut self, record: FileRecord) {
        self.manifest.insert(record.filename.clone(), record.url.clone());
        self.records.push(record);
    }

    pub fn uploaded_count(&self) -> usize {
        self.count(|o| o == UploadOutcome::Uploaded)
    }

    pub fn skipped_count(&self) -> usize {
        self.count(|o| o == UploadOutcome::Skipped(SkipReason::AlreadyPresent))
    }

    pub fn planned_count(&self) -> usize {
        self.count(|o| o == UploadOutcome::Skipped(SkipReason::DryRun))
    }

    fn count(&self, pred: impl Fn(UploadOutcome) -> bool) -> usize {
        self.records.iter().filter(|r| pred(r.outcome)).count()
    }
}
