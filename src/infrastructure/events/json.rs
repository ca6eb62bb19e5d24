//! JSON Event Sink
//!
//! Outputs upload events as NDJSON for CI/automation consumption.

use crate::domain::entities::UploadOutcome;
use crate::domain::ports::{UploadEvent, UploadEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl UploadEventSink for JsonEventSink {
    fn on_event(&self, event: UploadEvent) {
        let json = match event {
            UploadEvent::Started {
                bucket,
                directory,
                file_count,
                dry_run,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "upload",
                    "bucket": bucket,
                    "directory": directory,
                    "file_count": file_count,
                    "dry_run": dry_run,
                })
            }

            UploadEvent::FileProcessed {
                index,
                filename,
                key,
                url,
                outcome: UploadOutcome::Uploaded,
            } => {
                serde_json::json!({
                    "event": "item_uploaded",
                    "command": "upload",
                    "index": index,
                    "path": filename,
                    "key": key,
                    "url": url,
                })
            }

            UploadEvent::FileProcessed {
                index,
                filename,
                key,
                url,
                outcome: UploadOutcome::Skipped(reason),
            } => {
                serde_json::json!({
                    "event": "item_skipped",
                    "command": "upload",
                    "index": index,
                    "path": filename,
                    "key": key,
                    "url": url,
                    "reason": reason.as_str(),
                })
            }

            UploadEvent::Completed {
                uploaded_count,
                skipped_count,
                planned_count,
            } => {
                serde_json::json!({
                    "event": "complete",
                    "command": "upload",
                    "status": "success",
                    "uploaded": uploaded_count,
                    "skipped": skipped_count,
                    "planned": planned_count,
                })
            }
        };

        self.write_event(json);
    }
}
