//! Console Event Sink
//!
//! Human-readable progress lines for interactive runs.

use crate::domain::ports::{UploadEvent, UploadEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that prints one progress line per file
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    verbose: u8,
}

impl ConsoleEventSink {
    /// Create a console sink writing to stdout
    pub fn stdout(verbose: u8) -> Self {
        Self::with_writer(io::stdout(), verbose)
    }

    /// Create a console sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W, verbose: u8) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbose,
        }
    }

    fn write_line(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl UploadEventSink for ConsoleEventSink {
    fn on_event(&self, event: UploadEvent) {
        match event {
            UploadEvent::Started {
                bucket,
                directory,
                file_count,
                dry_run,
            } => {
                self.write_line(&format!("Found {} files to upload", file_count));
                let target = if directory.trim_matches('/').is_empty() {
                    bucket
                } else {
                    format!("{}/{}", bucket, directory.trim_matches('/'))
                };
                if dry_run {
                    self.write_line(&format!("Dry run: checking {}", target));
                } else {
                    self.write_line(&format!("Uploading to {}", target));
                }
            }

            UploadEvent::FileProcessed {
                filename,
                key,
                url,
                outcome,
                ..
            } => {
                self.write_line(&format!("{:<10} {}", outcome.label(), filename));
                if self.verbose > 0 {
                    self.write_line(&format!("{:<10} key: {}", "", key));
                    self.write_line(&format!("{:<10} url: {}", "", url));
                }
            }

            UploadEvent::Completed {
                uploaded_count,
                skipped_count,
                planned_count,
            } => {
                if self.verbose > 0 {
                    self.write_line(&format!(
                        "{} uploaded, {} skipped, {} planned",
                        uploaded_count, skipped_count, planned_count
                    ));
                }
            }
        }
    }
}
