//! Manifest output
//!
//! Writes the formatted manifest through a temp file in the target directory
//! and renames it into place, so readers never observe a partial manifest.

use std::io::Write;
use std::path::Path;

use crate::domain::entities::Manifest;
use crate::domain::services::format_manifest;
use crate::domain::value_objects::ManifestFormat;
use crate::error::{UploadError, UploadResult};

/// Format the manifest and write it to `path`, unless this is a dry run.
///
/// Returns whether a file was written. A dry run never touches `path`.
pub fn publish_manifest(
    manifest: &Manifest,
    format: ManifestFormat,
    path: &Path,
    dry_run: bool,
) -> UploadResult<bool> {
    if dry_run {
        return Ok(false);
    }
    let content = format_manifest(manifest, format)?;
    write_manifest(path, &content)?;
    Ok(true)
}

/// Atomically write `content` to `path`, creating parent directories.
pub fn write_manifest(path: &Path, content: &[u8]) -> UploadResult<()> {
    let write_error = |source: std::io::Error| UploadError::WriteManifest {
        path: path.to_path_buf(),
        source,
    };

    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent).map_err(write_error)?;

    let mut builder = tempfile::Builder::new();
    builder.prefix(".static-upload-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o644));
    }

    let mut tmp = builder.tempfile_in(parent).map_err(write_error)?;
    tmp.write_all(content).map_err(write_error)?;
    tmp.flush().map_err(write_error)?;
    tmp.persist(path).map_err(|e| write_error(e.error))?;

    Ok(())
}
