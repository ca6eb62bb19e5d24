//! Public URL resolution for uploaded objects

use crate::domain::value_objects::ObjectKey;

/// Host of the generic path-style S3 endpoint
pub const DEFAULT_PUBLIC_HOST: &str = "s3.amazonaws.com";

/// Maps (bucket, key) to the https URL clients fetch the object from.
///
/// The default bucket has a custom domain bound to it, so its objects are
/// served from `https://<bucket>/<key>`. Every other bucket goes through the
/// path-style endpoint `https://<public_host>/<bucket>/<key>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlResolver {
    default_bucket: String,
    public_host: String,
}

impl UrlResolver {
    pub fn new(default_bucket: impl Into<String>, public_host: impl Into<String>) -> Self {
        Self {
            default_bucket: default_bucket.into(),
            public_host: public_host.into(),
        }
    }

    /// Bucket served from its own domain
    pub fn default_bucket(&self) -> &str {
        &self.default_bucket
    }

    /// Whether `bucket` is the domain-aliased default bucket
    pub fn is_default_bucket(&self, bucket: &str) -> bool {
        bucket == self.default_bucket
    }

    /// Resolve the public URL of `key` in `bucket`
    pub fn resolve(&self, bucket: &str, key: &ObjectKey) -> String {
        if self.is_default_bucket(bucket) {
            format!("https://{}/{}", bucket, key)
        } else {
            format!("https://{}/{}/{}", self.public_host, bucket, key)
        }
    }
}
