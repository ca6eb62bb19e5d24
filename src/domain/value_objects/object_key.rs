//! Object Key Value Object
//!
//! Remote storage keys and the filename versioning rules that produce them.

use std::fmt;

use super::Fingerprint;

/// Insert a fingerprint before the final extension of a filename.
///
/// Only the last path component is inspected, so dots in directory names
/// are left alone. Names without an extension (including dotfiles such as
/// `.babelrc`) get `.<fingerprint>` appended.
///
/// ```
/// use static_upload::domain::value_objects::{versioned_filename, Fingerprint};
///
/// let fp = Fingerprint::from_bytes(b"hello");
/// assert_eq!(
///     versioned_filename("public/app.js", &fp),
///     format!("public/app.{}.js", fp)
/// );
/// ```
pub fn versioned_filename(filename: &str, fingerprint: &Fingerprint) -> String {
    let name_start = filename
        .rfind(std::path::is_separator)
        .map(|i| i + 1)
        .unwrap_or(0);
    let name = &filename[name_start..];

    match name.rfind('.') {
        Some(dot) if dot > 0 => {
            let split = name_start + dot;
            format!(
                "{}.{}{}",
                &filename[..split],
                fingerprint,
                &filename[split..]
            )
        }
        _ => format!("{}.{}", filename, fingerprint),
    }
}

/// Extension of the last path component, without the dot.
///
/// Dotfiles have no extension.
pub fn extension_of(filename: &str) -> Option<&str> {
    let name = filename
        .rsplit(std::path::is_separator)
        .next()
        .unwrap_or(filename);
    match name.rfind('.') {
        Some(dot) if dot > 0 => Some(&name[dot + 1..]),
        _ => None,
    }
}

/// Whether a filename carries one of the versionable extensions.
///
/// `extensions` are given with or without the leading dot and compared
/// exactly, so `site.CSS` is uploaded under its own name.
pub fn is_versionable<S: AsRef<str>>(filename: &str, extensions: &[S]) -> bool {
    match extension_of(filename) {
        Some(ext) => extensions
            .iter()
            .any(|e| e.as_ref().trim_start_matches('.') == ext),
        None => false,
    }
}

/// Full key of an object in the bucket (`<directory>/<name>`).
///
/// Built with path-clean semantics: empty and `.` segments vanish, `..`
/// removes the previous segment and is dropped when there is nothing left to
/// remove, and the key never starts with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectKey(String);

impl ObjectKey {
    /// Join a remote directory prefix with a (possibly nested) filename
    pub fn new(directory: &str, name: &str) -> Self {
        let mut segments: Vec<&str> = Vec::new();
        let parts = directory
            .split(std::path::is_separator)
            .chain(name.split(std::path::is_separator));
        for part in parts {
            match part {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                other => segments.push(other),
            }
        }
        Self(segments.join("/"))
    }

    /// Get the key string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ObjectKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
