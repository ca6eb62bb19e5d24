//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Flags left unset fall back to the resolved configuration
//! - `--json` switches both progress and errors to NDJSON

use std::path::PathBuf;

use clap::Parser;

/// static-upload - fingerprint and publish static assets to S3
#[derive(Parser, Debug)]
#[command(name = "static-upload")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Credentials are read from AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY \
(plus optional AWS_SESSION_TOKEN)."
)]
pub struct Cli {
    /// The S3 bucket to upload to (default: configured default bucket)
    #[arg(long)]
    pub bucket: Option<String>,

    /// Remote directory prefix (required for the default bucket)
    #[arg(long, default_value = "")]
    pub dir: String,

    /// Comma-separated glob patterns selecting the files to upload
    #[arg(long, default_value = "")]
    pub files: String,

    /// Manifest output file (default: staticAssets.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Manifest format: json or csv
    #[arg(long)]
    pub format: Option<String>,

    /// Check what would be uploaded without uploading or writing the manifest
    #[arg(long)]
    pub dry_run: bool,

    /// Output NDJSON events for CI
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv); the version is on -V
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a config file (default: ./static-upload.toml, then user config)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
