//! static-upload CLI - fingerprint and publish static assets to S3
//!
//! Usage: static-upload --dir <prefix> --files <globs> [--bucket <name>]
//!        [-o <manifest>] [--format json|csv] [--dry-run] [--json]

mod commands;
mod ui;

use clap::Parser;
use static_upload::presentation::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = commands::upload::cmd_upload(&cli) {
        ui::error::print_error(&err, cli.json);
        std::process::exit(1);
    }
}
