//! Manifest serialization

use crate::domain::entities::Manifest;
use crate::domain::value_objects::ManifestFormat;
use crate::error::{UploadError, UploadResult};

/// Serialize a manifest in the selected format
pub fn format_manifest(manifest: &Manifest, format: ManifestFormat) -> UploadResult<Vec<u8>> {
    match format {
        ManifestFormat::Json => format_json(manifest),
        ManifestFormat::Csv => format_csv(manifest),
    }
}

/// Two-space indented JSON object
fn format_json(manifest: &Manifest) -> UploadResult<Vec<u8>> {
    serde_json::to_vec_pretty(manifest).map_err(|e| UploadError::Serialize(e.to_string()))
}

/// One `filename,url` row per entry, no header
fn format_csv(manifest: &Manifest) -> UploadResult<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    for entry in manifest.entries() {
        writer
            .write_record([entry.filename, entry.url])
            .map_err(|e| UploadError::Serialize(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| UploadError::Serialize(e.to_string()))
}
