//! Local filesystem adapters
//!
//! Input pattern expansion and manifest output.

mod glob;
mod manifest_writer;

pub use glob::{expand_file_list, expand_pattern};
pub use manifest_writer::{publish_manifest, write_manifest};
