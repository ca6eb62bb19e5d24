//! Domain Entities

pub mod manifest;
pub mod upload_outcome;

pub use manifest::{Manifest, ManifestEntry};
pub use upload_outcome::{FileRecord, SkipReason, UploadOutcome};
