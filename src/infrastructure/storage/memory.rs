//! In-memory object store
//!
//! Keeps objects in a map and counts calls, so batches can be exercised
//! without a network. Failures can be injected per key.

use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::ports::{ObjectPut, ObjectStore, StoreError, StoreResult};
use crate::domain::value_objects::ObjectKey;

/// An object held by [`MemoryObjectStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub content: Vec<u8>,
    pub content_type: Option<String>,
    pub cache_control: String,
}

/// Object store backed by a `BTreeMap`
#[derive(Debug, Default)]
pub struct MemoryObjectStore {
    objects: Mutex<BTreeMap<(String, String), StoredObject>>,
    failing_heads: Mutex<HashSet<String>>,
    failing_puts: Mutex<HashSet<String>>,
    head_calls: AtomicUsize,
    put_calls: AtomicUsize,
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate an object
    pub fn insert(&self, bucket: &str, key: &str, content: &[u8]) {
        self.lock_objects().insert(
            (bucket.to_string(), key.to_string()),
            StoredObject {
                content: content.to_vec(),
                content_type: None,
                cache_control: String::new(),
            },
        );
    }

    /// Make existence checks for `key` fail
    pub fn fail_head(&self, key: &str) {
        if let Ok(mut keys) = self.failing_heads.lock() {
            keys.insert(key.to_string());
        }
    }

    /// Make uploads to `key` fail
    pub fn fail_put(&self, key: &str) {
        if let Ok(mut keys) = self.failing_puts.lock() {
            keys.insert(key.to_string());
        }
    }

    pub fn get(&self, bucket: &str, key: &str) -> Option<StoredObject> {
        self.lock_objects()
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    /// All keys stored in `bucket`, sorted
    pub fn keys(&self, bucket: &str) -> Vec<String> {
        self.lock_objects()
            .keys()
            .filter(|(b, _)| b == bucket)
            .map(|(_, k)| k.clone())
            .collect()
    }

    /// Number of `exists` calls so far
    pub fn head_calls(&self) -> usize {
        self.head_calls.load(Ordering::SeqCst)
    }

    /// Number of `put` calls so far
    pub fn put_calls(&self) -> usize {
        self.put_calls.load(Ordering::SeqCst)
    }

    fn lock_objects(&self) -> std::sync::MutexGuard<'_, BTreeMap<(String, String), StoredObject>> {
        self.objects
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn is_failing(set: &Mutex<HashSet<String>>, key: &str) -> bool {
        set.lock().map(|keys| keys.contains(key)).unwrap_or(false)
    }
}

impl ObjectStore for MemoryObjectStore {
    fn exists(&self, bucket: &str, key: &ObjectKey) -> StoreResult<bool> {
        self.head_calls.fetch_add(1, Ordering::SeqCst);
        if Self::is_failing(&self.failing_heads, key.as_str()) {
            return Err(StoreError::Head {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: "injected failure".to_string(),
            });
        }
        Ok(self
            .lock_objects()
            .contains_key(&(bucket.to_string(), key.to_string())))
    }

    fn put(&self, object: &ObjectPut, mut body: File) -> StoreResult<()> {
        self.put_calls.fetch_add(1, Ordering::SeqCst);
        let put_error = |message: String| StoreError::Put {
            bucket: object.bucket.clone(),
            key: object.key.to_string(),
            message,
        };

        if Self::is_failing(&self.failing_puts, object.key.as_str()) {
            return Err(put_error("injected failure".to_string()));
        }

        let mut content = Vec::new();
        body.read_to_end(&mut content)
            .map_err(|e| put_error(e.to_string()))?;

        self.lock_objects().insert(
            (object.bucket.clone(), object.key.to_string()),
            StoredObject {
                content,
                content_type: object.content_type.clone(),
                cache_control: object.cache_control.clone(),
            },
        );
        Ok(())
    }
}
