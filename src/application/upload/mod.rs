//! Upload Module
//!
//! Orchestrates fingerprinting, existence checks and uploads for a batch of
//! files.
//!
//! ## Structure
//!
//! - `options` - Batch inputs (`UploadOptions`)
//! - `result` - Batch results (`UploadReport`)
//! - `use_case` - Core use case logic (`UploadUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use static_upload::application::upload::{UploadOptions, UploadUseCase};
//!
//! let use_case = UploadUseCase::new(store, resolver);
//! let report = use_case.execute(&UploadOptions::new("assets", "v1").with_files(files))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::UploadOptions;
pub use result::UploadReport;
pub use use_case::{UploadUseCase, DEFAULT_VERSIONED_EXTENSIONS};
