//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `UploadUseCase` - Fingerprint, check, upload and collect the manifest

pub mod upload;

pub use upload::{UploadOptions, UploadReport, UploadUseCase};
