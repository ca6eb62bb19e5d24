//! Value Objects
//!
//! Immutable types compared by value.

pub mod fingerprint;
pub mod manifest_format;
pub mod object_key;

pub use fingerprint::Fingerprint;
pub use manifest_format::ManifestFormat;
pub use object_key::{extension_of, is_versionable, versioned_filename, ObjectKey};
