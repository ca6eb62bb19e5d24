//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{UploadError, UploadResult};

use super::types::Config;

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "static-upload.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> UploadResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| UploadError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| UploadError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the effective configuration.
///
/// An explicit path must load. Otherwise the first existing file among
/// `./static-upload.toml` and `<config dir>/static-upload/config.toml` is
/// used, falling back to defaults. Env overrides apply in every case.
pub fn resolve(explicit: Option<&Path>) -> UploadResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    for candidate in candidate_paths() {
        if candidate.is_file() {
            let (config, warnings) = load_with_warnings(&candidate)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Implicit config locations, highest priority first
pub fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("static-upload").join("config.toml"));
    }
    paths
}

/// Apply environment variable overrides (STATIC_UPLOAD_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `get_env` (injectable for tests)
pub fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    let get = |key: &str| get_env(key).filter(|v| !v.trim().is_empty());

    // STATIC_UPLOAD_DEFAULT_BUCKET
    if let Some(bucket) = get("STATIC_UPLOAD_DEFAULT_BUCKET") {
        config.storage.default_bucket = bucket.trim().to_string();
    }

    // STATIC_UPLOAD_REGION
    if let Some(region) = get("STATIC_UPLOAD_REGION") {
        config.storage.region = region.trim().to_string();
    }

    // STATIC_UPLOAD_ENDPOINT_URL
    if let Some(endpoint) = get("STATIC_UPLOAD_ENDPOINT_URL") {
        config.storage.endpoint_url = Some(endpoint.trim().to_string());
    }

    // STATIC_UPLOAD_PUBLIC_HOST
    if let Some(host) = get("STATIC_UPLOAD_PUBLIC_HOST") {
        config.storage.public_host = host.trim().to_string();
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "storage",
        "default_bucket",
        "region",
        "public_host",
        "endpoint_url",
        "upload",
        "versioned_extensions",
        "cache_control",
        "expires_years",
        "manifest",
        "output",
        "format",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
