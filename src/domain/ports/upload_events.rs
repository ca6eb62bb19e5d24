//! Upload Event Port
//!
//! Observable interface for upload batches.
//! Drives console progress lines and the NDJSON event stream.

use crate::domain::entities::UploadOutcome;

/// Event emitted during an upload batch
#[derive(Debug, Clone)]
pub enum UploadEvent {
    /// Batch started
    Started {
        bucket: String,
        directory: String,
        file_count: usize,
        dry_run: bool,
    },

    /// A file finished processing
    FileProcessed {
        index: usize,
        filename: String,
        key: String,
        url: String,
        outcome: UploadOutcome,
    },

    /// All files processed
    Completed {
        uploaded_count: usize,
        skipped_count: usize,
        planned_count: usize,
    },
}

/// Trait for receiving upload events
///
/// Implementations:
/// - ConsoleEventSink: progress lines in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait UploadEventSink: Send + Sync {
    /// Handle an upload event
    fn on_event(&self, event: UploadEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl UploadEventSink for NoopEventSink {
    fn on_event(&self, _event: UploadEvent) {}
}
