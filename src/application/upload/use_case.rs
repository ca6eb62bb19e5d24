//! Upload Use Case
//!
//! Orchestrates one upload batch:
//! 1. Open each input file
//! 2. Fingerprint versionable files and derive their object key
//! 3. Resolve the public URL
//! 4. Skip objects already present in the bucket
//! 5. Upload the rest (unless dry run)
//! 6. Collect the filename → URL manifest
//!
//! Keys of versioned files are content-addressed, so "already present" means
//! "this exact content is already published" and re-runs transfer nothing.

use std::fs::File;
use std::io::Seek;
use std::path::Path;
use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::{FileRecord, SkipReason, UploadOutcome};
use crate::domain::ports::{NoopEventSink, ObjectStore, UploadEvent, UploadEventSink};
use crate::domain::services::{UploadPolicy, UrlResolver};
use crate::domain::value_objects::{is_versionable, versioned_filename, Fingerprint, ObjectKey};
use crate::error::{UploadError, UploadResult};

use super::options::UploadOptions;
use super::result::UploadReport;

/// Extensions fingerprinted by default
pub const DEFAULT_VERSIONED_EXTENSIONS: [&str; 2] = ["js", "css"];

/// Upload use case - drives a batch of files through the store
pub struct UploadUseCase {
    store: Arc<dyn ObjectStore>,
    resolver: UrlResolver,
    policy: UploadPolicy,
    versioned_extensions: Vec<String>,
}

impl UploadUseCase {
    pub fn new(store: Arc<dyn ObjectStore>, resolver: UrlResolver) -> Self {
        Self {
            store,
            resolver,
            policy: UploadPolicy::default(),
            versioned_extensions: DEFAULT_VERSIONED_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }

    pub fn with_policy(mut self, policy: UploadPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_versioned_extensions(mut self, extensions: Vec<String>) -> Self {
        self.versioned_extensions = extensions;
        self
    }

    pub fn resolver(&self) -> &UrlResolver {
        &self.resolver
    }

    /// Execute the batch silently
    pub fn execute(&self, options: &UploadOptions) -> UploadResult<UploadReport> {
        self.execute_with_events(options, &NoopEventSink)
    }

    /// Execute the batch, reporting progress to `events`.
    ///
    /// The first error aborts the batch; files after it are not touched and
    /// no partial report is returned.
    pub fn execute_with_events(
        &self,
        options: &UploadOptions,
        events: &dyn UploadEventSink,
    ) -> UploadResult<UploadReport> {
        options.validate(&self.resolver)?;

        events.on_event(UploadEvent::Started {
            bucket: options.bucket.clone(),
            directory: options.directory.clone(),
            file_count: options.files.len(),
            dry_run: options.dry_run,
        });

        let mut report = UploadReport::new();
        for (index, path) in options.files.iter().enumerate() {
            let record = self.process_file(options, path)?;
            events.on_event(UploadEvent::FileProcessed {
                index,
                filename: record.filename.clone(),
                key: record.key.to_string(),
                url: record.url.clone(),
                outcome: record.outcome,
            });
            report.record(record);
        }

        events.on_event(UploadEvent::Completed {
            uploaded_count: report.uploaded_count(),
            skipped_count: report.skipped_count(),
            planned_count: report.planned_count(),
        });

        Ok(report)
    }

    /// Run a single file through open → fingerprint → check → upload.
    ///
    /// The file handle is dropped when this returns.
    fn process_file(&self, options: &UploadOptions, path: &Path) -> UploadResult<FileRecord> {
        let filename = path
            .to_str()
            .ok_or_else(|| UploadError::NonUtf8Path {
                path: path.to_path_buf(),
            })?
            .to_owned();
        let mut file = File::open(path).map_err(|source| UploadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let upload_name = if is_versionable(&filename, &self.versioned_extensions) {
            let fingerprint = Fingerprint::from_reader(&mut file).map_err(|source| {
                UploadError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            versioned_filename(&filename, &fingerprint)
        } else {
            filename.clone()
        };

        let key = ObjectKey::new(&options.directory, &upload_name);
        let url = self.resolver.resolve(&options.bucket, &key);

        let outcome = if self.store.exists(&options.bucket, &key)? {
            UploadOutcome::Skipped(SkipReason::AlreadyPresent)
        } else if options.dry_run {
            UploadOutcome::Skipped(SkipReason::DryRun)
        } else {
            file.rewind().map_err(|source| UploadError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let object = self
                .policy
                .object_put(&options.bucket, key.clone(), &filename, Utc::now());
            self.store.put(&object, file)?;
            UploadOutcome::Uploaded
        };

        Ok(FileRecord {
            filename,
            key,
            url,
            outcome,
        })
    }
}
