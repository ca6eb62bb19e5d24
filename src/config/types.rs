//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::upload::DEFAULT_VERSIONED_EXTENSIONS;
use crate::domain::services::{
    UploadPolicy, DEFAULT_CACHE_CONTROL, DEFAULT_EXPIRES_YEARS, DEFAULT_PUBLIC_HOST,
};
use crate::error::UploadResult;

use super::loader::{self, ConfigWarning};

/// Bucket that has a domain alias, so its URLs omit the storage host
pub const DEFAULT_BUCKET: &str = "static.buffer.com";

/// Region used when none is configured
pub const DEFAULT_REGION: &str = "us-east-1";

/// Manifest path used when none is configured
pub const DEFAULT_MANIFEST_OUTPUT: &str = "staticAssets.json";

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_bucket")]
    pub default_bucket: String,

    #[serde(default = "default_region")]
    pub region: String,

    /// Host used in URLs for buckets without a domain alias
    #[serde(default = "default_public_host")]
    pub public_host: String,

    /// Custom endpoint for S3-compatible stores
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            default_bucket: default_bucket(),
            region: default_region(),
            public_host: default_public_host(),
            endpoint_url: None,
        }
    }
}

fn default_bucket() -> String {
    DEFAULT_BUCKET.to_string()
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn default_public_host() -> String {
    DEFAULT_PUBLIC_HOST.to_string()
}

/// Upload configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Extensions (without dot) whose filenames get a fingerprint
    #[serde(default = "default_versioned_extensions")]
    pub versioned_extensions: Vec<String>,

    #[serde(default = "default_cache_control")]
    pub cache_control: String,

    #[serde(default = "default_expires_years")]
    pub expires_years: u32,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            versioned_extensions: default_versioned_extensions(),
            cache_control: default_cache_control(),
            expires_years: default_expires_years(),
        }
    }
}

impl UploadConfig {
    /// Header policy applied to every uploaded object
    pub fn policy(&self) -> UploadPolicy {
        UploadPolicy {
            cache_control: self.cache_control.clone(),
            expires_years: self.expires_years,
        }
    }
}

fn default_versioned_extensions() -> Vec<String> {
    DEFAULT_VERSIONED_EXTENSIONS
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

fn default_cache_control() -> String {
    DEFAULT_CACHE_CONTROL.to_string()
}

fn default_expires_years() -> u32 {
    DEFAULT_EXPIRES_YEARS
}

/// Manifest output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestConfig {
    #[serde(default = "default_output")]
    pub output: String,

    /// Format selector, validated when the upload command runs
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            format: default_format(),
        }
    }
}

fn default_output() -> String {
    DEFAULT_MANIFEST_OUTPUT.to_string()
}

fn default_format() -> String {
    "json".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub upload: UploadConfig,

    #[serde(default)]
    pub manifest: ManifestConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> UploadResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> UploadResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve configuration from an explicit path, the working directory,
    /// the user config directory, or defaults. Env overrides are applied last.
    pub fn resolve(explicit: Option<&Path>) -> UploadResult<(Self, Vec<ConfigWarning>)> {
        loader::resolve(explicit)
    }

    /// Apply environment variable overrides (STATIC_UPLOAD_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
