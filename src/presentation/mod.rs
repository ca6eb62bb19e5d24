//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command line flags
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Summary rendering
//!
//! ## Usage
//!
//! ```ignore
//! use static_upload::presentation::factory;
//!
//! let store = factory::create_s3_store(&config)?;
//! let use_case = factory::create_upload_use_case(&config, store);
//! let report = use_case.execute(&options)?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::Cli;
pub use factory::{create_s3_store, create_upload_use_case, create_url_resolver};
pub use output::{create_renderer, OutputFormat, SummaryContext, UploadReportRenderer};
