//! Manifest Entity
//!
//! Maps each local input filename to the public URL it was published at.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single manifest row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestEntry<'a> {
    pub filename: &'a str,
    pub url: &'a str,
}

/// Filename → URL mapping produced by an upload batch.
///
/// Keys are unique. Entries iterate sorted by filename so output is stable
/// across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: BTreeMap<String, String>,
}

impl Manifest {
    /// Create an empty manifest
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the URL for a filename, replacing any previous URL.
    ///
    /// Returns the replaced URL, if any.
    pub fn insert(&mut self, filename: impl Into<String>, url: impl Into<String>) -> Option<String> {
        self.entries.insert(filename.into(), url.into())
    }

    /// Look up the URL recorded for a filename
    pub fn get(&self, filename: &str) -> Option<&str> {
        self.entries.get(filename).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in filename order
    pub fn entries(&self) -> impl Iterator<Item = ManifestEntry<'_>> {
        self.entries.iter().map(|(filename, url)| ManifestEntry {
            filename: filename.as_str(),
            url: url.as_str(),
        })
    }
}

impl FromIterator<(String, String)> for Manifest {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
