//! Event Sink Implementations
//!
//! Provides concrete implementations of UploadEventSink:
//! - ConsoleEventSink: human-readable progress lines
//! - JsonEventSink: NDJSON output for CI/automation

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
