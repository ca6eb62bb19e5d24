//! Manifest format selector

use std::fmt;
use std::str::FromStr;

use crate::error::UploadError;

/// Serialization format of the URL manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManifestFormat {
    /// Indented JSON object (`{"app.js": "https://..."}`)
    #[default]
    Json,
    /// Headerless two-column CSV (`app.js,https://...`)
    Csv,
}

impl ManifestFormat {
    /// All supported formats
    pub const ALL: [ManifestFormat; 2] = [ManifestFormat::Json, ManifestFormat::Csv];

    /// Selector string used on the command line and in config
    pub fn as_str(&self) -> &'static str {
        match self {
            ManifestFormat::Json => "json",
            ManifestFormat::Csv => "csv",
        }
    }
}

impl FromStr for ManifestFormat {
    type Err = UploadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ManifestFormat::Json),
            "csv" => Ok(ManifestFormat::Csv),
            _ => Err(UploadError::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ManifestFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
