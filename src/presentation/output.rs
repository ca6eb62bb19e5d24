//! Output Rendering
//!
//! Renders the end-of-run summary as text or JSON.

use std::path::Path;
use std::time::Duration;

use crate::application::UploadReport;
use crate::domain::value_objects::ManifestFormat;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

/// Run details the report itself does not carry
#[derive(Debug, Clone, Copy)]
pub struct SummaryContext<'a> {
    pub manifest_path: &'a Path,
    pub format: ManifestFormat,
    pub dry_run: bool,
    pub elapsed: Duration,
}

/// Trait for rendering upload reports
pub trait UploadReportRenderer {
    /// Render the summary; the caller decides where it goes
    fn render(&self, report: &UploadReport, ctx: &SummaryContext<'_>) -> String;
}

/// Text renderer for upload reports
#[derive(Debug, Default)]
pub struct TextRenderer {
    /// Verbosity level
    pub verbose: u8,
}

impl UploadReportRenderer for TextRenderer {
    fn render(&self, report: &UploadReport, ctx: &SummaryContext<'_>) -> String {
        let mut out = String::new();

        if ctx.dry_run {
            out.push_str(&format!("Completed dry run in {:.2?}\n", ctx.elapsed));
            out.push_str(&format!(
                "  {} to upload, {} already present, manifest not written\n",
                report.planned_count(),
                report.skipped_count()
            ));
        } else {
            out.push_str(&format!(
                "Successfully uploaded static assets and generated {} in {:.2?}\n",
                ctx.manifest_path.display(),
                ctx.elapsed
            ));
            if self.verbose > 0 {
                out.push_str(&format!(
                    "  {} uploaded, {} already present ({} manifest)\n",
                    report.uploaded_count(),
                    report.skipped_count(),
                    ctx.format
                ));
            }
        }

        if self.verbose > 1 {
            for entry in report.manifest.entries() {
                out.push_str(&format!("  {} -> {}\n", entry.filename, entry.url));
            }
        }

        out
    }
}

/// JSON renderer for upload reports
pub struct JsonRenderer;

impl UploadReportRenderer for JsonRenderer {
    fn render(&self, report: &UploadReport, ctx: &SummaryContext<'_>) -> String {
        let manifest = if ctx.dry_run {
            serde_json::Value::Null
        } else {
            serde_json::Value::String(ctx.manifest_path.display().to_string())
        };

        let json = serde_json::json!({
            "event": "summary",
            "command": "upload",
            "dry_run": ctx.dry_run,
            "manifest": manifest,
            "format": ctx.format.as_str(),
            "uploaded": report.uploaded_count(),
            "skipped": report.skipped_count(),
            "planned": report.planned_count(),
            "elapsed_ms": ctx.elapsed.as_millis() as u64,
        });

        format!("{}\n", json)
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat, verbose: u8) -> Box<dyn UploadReportRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { verbose }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
