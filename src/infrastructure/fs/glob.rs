//! Input file expansion
//!
//! Turns the comma-separated `--files` list into concrete paths. Patterns use
//! glob syntax anchored at their literal directory prefix: `*` stays inside
//! one directory, `**` crosses directories.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use ignore::overrides::OverrideBuilder;
use ignore::WalkBuilder;

use crate::error::{UploadError, UploadResult};

const GLOB_META: &[char] = &['*', '?', '[', '{'];

/// Expand a comma-separated list of patterns.
///
/// Files are returned in pattern order, each pattern's matches sorted by
/// path, with duplicates removed. Patterns that match nothing contribute
/// nothing; a malformed pattern is an error.
pub fn expand_file_list(list: &str) -> UploadResult<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for pattern in list.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        for path in expand_pattern(pattern)? {
            if seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }

    Ok(files)
}

/// Expand a single pattern into the files it matches
pub fn expand_pattern(pattern: &str) -> UploadResult<Vec<PathBuf>> {
    let (base, glob) = split_pattern(pattern);

    let Some(glob) = glob else {
        let path = Path::new(pattern);
        return Ok(if path.is_file() {
            vec![display_path(path)]
        } else {
            Vec::new()
        });
    };

    let root = if base.is_empty() {
        PathBuf::from(".")
    } else {
        PathBuf::from(base)
    };

    let mut overrides = OverrideBuilder::new(&root);
    overrides
        .add(&format!("/{}", glob))
        .map_err(|e| invalid_glob(pattern, e))?;
    let matcher = overrides.build().map_err(|e| invalid_glob(pattern, e))?;

    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let mut walker = WalkBuilder::new(&root);
    walker
        .standard_filters(false)
        .follow_links(true)
        .sort_by_file_name(|a, b| a.cmp(b));
    if !glob.contains("**") {
        walker.max_depth(Some(glob.split('/').count()));
    }

    let mut files = Vec::new();
    for entry in walker.build() {
        let entry = entry.map_err(|e| UploadError::Walk {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        if matcher.matched(entry.path(), false).is_whitelist() {
            files.push(display_path(entry.path()));
        }
    }

    Ok(files)
}

/// Split a pattern into its literal directory prefix and the glob part.
///
/// Returns `None` for the glob part when the pattern has no wildcards.
fn split_pattern(pattern: &str) -> (&str, Option<&str>) {
    let Some(meta) = pattern.find(GLOB_META) else {
        return (pattern, None);
    };

    match pattern[..meta].rfind('/') {
        Some(0) => ("/", Some(&pattern[1..])),
        Some(slash) => (&pattern[..slash], Some(&pattern[slash + 1..])),
        None => ("", Some(pattern)),
    }
}

/// Drop a leading `./`, whether the walker added it or the pattern had it
fn display_path(path: &Path) -> PathBuf {
    path.strip_prefix(".").unwrap_or(path).to_path_buf()
}

fn invalid_glob(pattern: &str, err: ignore::Error) -> UploadError {
    UploadError::InvalidGlob {
        pattern: pattern.to_string(),
        message: err.to_string(),
    }
}
