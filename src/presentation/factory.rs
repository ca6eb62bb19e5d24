//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::UploadUseCase;
use crate::config::Config;
use crate::domain::ports::ObjectStore;
use crate::domain::services::UrlResolver;
use crate::error::UploadResult;
use crate::infrastructure::{EnvCredentials, S3ObjectStore, S3Settings};

/// URL resolver for the configured default bucket and public host
pub fn create_url_resolver(config: &Config) -> UrlResolver {
    UrlResolver::new(
        config.storage.default_bucket.clone(),
        config.storage.public_host.clone(),
    )
}

/// Connection settings for the S3 store
pub fn s3_settings(config: &Config) -> S3Settings {
    S3Settings {
        region: config.storage.region.clone(),
        endpoint_url: config.storage.endpoint_url.clone(),
    }
}

/// Create the S3 store with credentials from the environment
pub fn create_s3_store(config: &Config) -> UploadResult<Arc<dyn ObjectStore>> {
    let credentials = EnvCredentials::from_env()?;
    let store = S3ObjectStore::new(&s3_settings(config), credentials)?;
    Ok(Arc::new(store))
}

/// Create an upload use case against `store`
///
/// Keeping the store a parameter lets tests wire in `MemoryObjectStore`.
pub fn create_upload_use_case(config: &Config, store: Arc<dyn ObjectStore>) -> UploadUseCase {
    UploadUseCase::new(store, create_url_resolver(config))
        .with_policy(config.upload.policy())
        .with_versioned_extensions(config.upload.versioned_extensions.clone())
}
