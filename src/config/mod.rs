//! Configuration module for static-upload
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (STATIC_UPLOAD_*)
//! 3. Explicit `--config` file, else `./static-upload.toml`
//! 4. User config (`<config dir>/static-upload/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    candidate_paths, with_env_overrides_from, ConfigWarning, LOCAL_CONFIG_FILE,
};
pub use types::{
    Config, ManifestConfig, StorageConfig, UploadConfig, DEFAULT_BUCKET, DEFAULT_MANIFEST_OUTPUT,
    DEFAULT_REGION,
};
