//! S3 object store
//!
//! Implements the ObjectStore port with the AWS SDK. The SDK is async; the
//! store owns a current-thread Tokio runtime and blocks on each request so
//! the port stays synchronous.

use std::fs::File;

use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::operation::head_object::HeadObjectError;
use aws_sdk_s3::primitives::{ByteStream, DateTime};
use aws_sdk_s3::Client;

use crate::domain::ports::{ObjectPut, ObjectStore, StoreError, StoreResult};
use crate::domain::value_objects::ObjectKey;
use crate::error::{UploadError, UploadResult};

/// Access key variable
pub const ACCESS_KEY_ENV: &str = "AWS_ACCESS_KEY_ID";
/// Secret key variable
pub const SECRET_KEY_ENV: &str = "AWS_SECRET_ACCESS_KEY";
/// Optional session token variable
pub const SESSION_TOKEN_ENV: &str = "AWS_SESSION_TOKEN";

/// Connection settings for [`S3ObjectStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Settings {
    pub region: String,
    /// Custom endpoint for S3-compatible stores (enables path-style addressing)
    pub endpoint_url: Option<String>,
}

/// Static credentials read from the process environment
#[derive(Clone, PartialEq, Eq)]
pub struct EnvCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

impl std::fmt::Debug for EnvCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .finish()
    }
}

impl EnvCredentials {
    /// Read credentials from the process environment
    pub fn from_env() -> UploadResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read credentials through `get_env` (injectable for tests)
    pub fn from_lookup(get_env: impl Fn(&str) -> Option<String>) -> UploadResult<Self> {
        let require = |name: &str| {
            get_env(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| UploadError::MissingCredentials {
                    message: format!("{} is not set", name),
                })
        };

        Ok(Self {
            access_key_id: require(ACCESS_KEY_ENV)?,
            secret_access_key: require(SECRET_KEY_ENV)?,
            session_token: get_env(SESSION_TOKEN_ENV).filter(|v| !v.trim().is_empty()),
        })
    }
}

/// Object store backed by an S3-compatible service
pub struct S3ObjectStore {
    client: Client,
    runtime: tokio::runtime::Runtime,
}

impl S3ObjectStore {
    /// Build a store from explicit credentials
    pub fn new(settings: &S3Settings, credentials: EnvCredentials) -> UploadResult<Self> {
        let creds = Credentials::new(
            credentials.access_key_id,
            credentials.secret_access_key,
            credentials.session_token,
            None,
            "static-upload-env",
        );

        let mut builder = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(settings.region.clone()))
            .credentials_provider(creds);
        if let Some(endpoint) = &settings.endpoint_url {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        Ok(Self {
            client: Client::from_conf(builder.build()),
            runtime,
        })
    }

    /// Build a store using credentials from the environment
    pub fn from_env(settings: &S3Settings) -> UploadResult<Self> {
        Self::new(settings, EnvCredentials::from_env()?)
    }
}

impl ObjectStore for S3ObjectStore {
    fn exists(&self, bucket: &str, key: &ObjectKey) -> StoreResult<bool> {
        let result = self.runtime.block_on(
            self.client
                .head_object()
                .bucket(bucket)
                .key(key.as_str())
                .send(),
        );

        match result {
            Ok(_) => Ok(true),
            Err(err) => {
                if err
                    .as_service_error()
                    .is_some_and(HeadObjectError::is_not_found)
                {
                    return Ok(false);
                }
                Err(StoreError::Head {
                    bucket: bucket.to_string(),
                    key: key.to_string(),
                    message: DisplayErrorContext(&err).to_string(),
                })
            }
        }
    }

    fn put(&self, object: &ObjectPut, body: File) -> StoreResult<()> {
        let put_error = |message: String| StoreError::Put {
            bucket: object.bucket.clone(),
            key: object.key.to_string(),
            message,
        };

        self.runtime.block_on(async {
            let body = ByteStream::read_from()
                .file(tokio::fs::File::from_std(body))
                .build()
                .await
                .map_err(|e| put_error(e.to_string()))?;

            self.client
                .put_object()
                .bucket(&object.bucket)
                .key(object.key.as_str())
                .set_content_type(object.content_type.clone())
                .cache_control(&object.cache_control)
                .expires(DateTime::from_secs(object.expires.timestamp()))
                .body(body)
                .send()
                .await
                .map_err(|e| put_error(DisplayErrorContext(&e).to_string()))?;

            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn credentials_from_lookup() {
        let creds = EnvCredentials::from_lookup(lookup(&[
            (ACCESS_KEY_ENV, "AKIA123"),
            (SECRET_KEY_ENV, "secret"),
        ]))
        .unwrap();
        assert_eq!(creds.access_key_id, "AKIA123");
        assert_eq!(creds.secret_access_key, "secret");
        assert_eq!(creds.session_token, None);
    }

    #[test]
    fn missing_secret_is_credential_error() {
        let err = EnvCredentials::from_lookup(lookup(&[(ACCESS_KEY_ENV, "AKIA123")])).unwrap_err();
        assert!(matches!(err, UploadError::MissingCredentials { .. }));
        assert!(err.to_string().contains(SECRET_KEY_ENV));
    }

    #[test]
    fn blank_access_key_is_credential_error() {
        let err = EnvCredentials::from_lookup(lookup(&[
            (ACCESS_KEY_ENV, "  "),
            (SECRET_KEY_ENV, "secret"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains(ACCESS_KEY_ENV));
    }

    #[test]
    fn debug_redacts_secret() {
        let creds = EnvCredentials {
            access_key_id: "AKIA123".to_string(),
            secret_access_key: "hunter2".to_string(),
            session_token: None,
        };
        assert!(!format!("{:?}", creds).contains("hunter2"));
    }

    #[test]
    fn store_builds_without_network() {
        let settings = S3Settings {
            region: "us-east-1".to_string(),
            endpoint_url: Some("http://127.0.0.1:9000".to_string()),
        };
        let creds = EnvCredentials {
            access_key_id: "a".to_string(),
            secret_access_key: "b".to_string(),
            session_token: None,
        };
        assert!(S3ObjectStore::new(&settings, creds).is_ok());
    }
}
