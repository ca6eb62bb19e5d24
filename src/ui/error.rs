use std::io::Write;

use static_upload::UploadError;

/// Suggested fix for errors the user can act on directly
fn hint(err: &UploadError) -> Option<String> {
    match err {
        UploadError::MissingDirectory { .. } => {
            Some("Pass --dir <prefix>, or --bucket <name> for a bucket of your own.".to_string())
        }
        UploadError::UnsupportedFormat { .. } => {
            Some("Use --format json or --format csv.".to_string())
        }
        UploadError::MissingCredentials { .. } => Some(
            "Export AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY before running.".to_string(),
        ),
        UploadError::InvalidGlob { .. } => {
            Some("Quote the --files value so the shell does not expand it.".to_string())
        }
        UploadError::Config { file, .. } => Some(format!("Fix {} and try again.", file.display())),
        _ => None,
    }
}

pub fn format_upload_error(err: &UploadError) -> String {
    let mut out = format!("[ERROR] {}\n", err);
    if let Some(hint) = hint(err) {
        out.push_str(&format!("  Fix: {}\n", hint));
    }
    out
}

pub fn format_error(err: &anyhow::Error) -> String {
    if let Some(upload) = err.downcast_ref::<UploadError>() {
        return format_upload_error(upload);
    }

    format!("[ERROR] {:#}\n", err)
}

/// GitHub Actions workflow command for an error
fn github_actions_annotation(message: &str) -> String {
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::error title=static-upload::{}", escaped)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "command": "upload",
            "message": format!("{:#}", err),
        });
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{}", output);
        return;
    }

    if std::env::var("GITHUB_ACTIONS").is_ok() {
        println!("{}", github_actions_annotation(&format!("{:#}", err)));
    }

    eprint!("{}", format_error(err));
}
