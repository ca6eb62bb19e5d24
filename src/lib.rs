//! static-upload - fingerprint and publish static assets to S3
//!
//! Uploads build artifacts to an S3 bucket under content-addressed keys
//! (`app.js` becomes `app.<fingerprint>.js`), skips objects that are already
//! published, and writes a filename → URL manifest in JSON or CSV.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{UploadOptions, UploadReport, UploadUseCase};
pub use config::Config;
pub use domain::entities::{Manifest, UploadOutcome};
pub use domain::value_objects::{Fingerprint, ManifestFormat, ObjectKey};
pub use error::{UploadError, UploadResult};
