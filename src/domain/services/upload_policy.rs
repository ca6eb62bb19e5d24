//! Object metadata policy for uploads
//!
//! Versioned objects never change under the same key, so they are served
//! with far-future caching headers.

use chrono::{DateTime, Months, Utc};

use crate::domain::ports::ObjectPut;
use crate::domain::value_objects::{extension_of, ObjectKey};

/// One year of public caching
pub const DEFAULT_CACHE_CONTROL: &str = "public, max-age=31536000";

/// Years until the `Expires` header
pub const DEFAULT_EXPIRES_YEARS: u32 = 10;

/// Metadata attached to every uploaded object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    pub cache_control: String,
    pub expires_years: u32,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            cache_control: DEFAULT_CACHE_CONTROL.to_string(),
            expires_years: DEFAULT_EXPIRES_YEARS,
        }
    }
}

impl UploadPolicy {
    /// Build the upload request for `key`, typed after `filename`
    pub fn object_put(
        &self,
        bucket: &str,
        key: ObjectKey,
        filename: &str,
        now: DateTime<Utc>,
    ) -> ObjectPut {
        ObjectPut {
            bucket: bucket.to_string(),
            key,
            content_type: content_type_for(filename),
            cache_control: self.cache_control.clone(),
            expires: self.expires_at(now),
        }
    }

    /// Expiry timestamp relative to `now`, saturating at the max date
    pub fn expires_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.checked_add_months(Months::new(self.expires_years.saturating_mul(12)))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

/// MIME type inferred from the file extension; `None` if unknown
pub fn content_type_for(filename: &str) -> Option<String> {
    let ext = extension_of(filename)?;
    mime_guess::from_ext(ext).first_raw().map(str::to_string)
}
