//! Domain Services
//!
//! Stateless business rules: URL resolution, upload metadata policy and
//! manifest serialization.

pub mod manifest_formatter;
pub mod upload_policy;
pub mod url_resolver;

pub use manifest_formatter::format_manifest;
pub use upload_policy::{
    content_type_for, UploadPolicy, DEFAULT_CACHE_CONTROL, DEFAULT_EXPIRES_YEARS,
};
pub use url_resolver::{UrlResolver, DEFAULT_PUBLIC_HOST};
