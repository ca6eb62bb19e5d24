//! Upload command entry point

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use static_upload::config::Config;
use static_upload::domain::ports::UploadEventSink;
use static_upload::infrastructure::{
    expand_file_list, publish_manifest, ConsoleEventSink, JsonEventSink,
};
use static_upload::presentation::factory::{
    create_s3_store, create_upload_use_case, create_url_resolver,
};
use static_upload::presentation::{
    create_renderer, Cli, OutputFormat, SummaryContext, UploadReportRenderer,
};
use static_upload::{ManifestFormat, UploadOptions};

use crate::ui::output::print_config_warnings;

/// Upload command: fingerprint, publish, write the manifest.
///
/// Everything that can be rejected without the network (config, format,
/// directory rule, patterns, credentials) is checked before the first
/// request.
pub fn cmd_upload(cli: &Cli) -> Result<()> {
    let started = Instant::now();

    let (config, warnings) = Config::resolve(cli.config.as_deref())?;
    if !cli.json {
        print_config_warnings(&warnings);
    }

    let format: ManifestFormat = cli
        .format
        .as_deref()
        .unwrap_or(&config.manifest.format)
        .parse()?;
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.manifest.output));
    let bucket = cli
        .bucket
        .clone()
        .unwrap_or_else(|| config.storage.default_bucket.clone());

    let mut options = UploadOptions::new(bucket, cli.dir.clone()).with_dry_run(cli.dry_run);
    options.validate(&create_url_resolver(&config))?;
    options.files = expand_file_list(&cli.files)?;

    let store = create_s3_store(&config)?;
    let use_case = create_upload_use_case(&config, store);

    let events: Box<dyn UploadEventSink> = if cli.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stdout(cli.verbose))
    };
    let report = use_case.execute_with_events(&options, events.as_ref())?;

    publish_manifest(&report.manifest, format, &output, cli.dry_run)?;

    let output_format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let summary = create_renderer(output_format, cli.verbose).render(
        &report,
        &SummaryContext {
            manifest_path: &output,
            format,
            dry_run: cli.dry_run,
            elapsed: started.elapsed(),
        },
    );
    print!("{}", summary);

    Ok(())
}
