//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `storage/` - Object stores (S3, in-memory)
//! - `fs/` - Input pattern expansion and manifest output
//! - `events/` - Event sinks (console, NDJSON)

pub mod events;
pub mod fs;
pub mod storage;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::{expand_file_list, publish_manifest, write_manifest};
pub use storage::{EnvCredentials, MemoryObjectStore, S3ObjectStore, S3Settings};
