//! Object store implementations

pub mod memory;
pub mod s3;

pub use memory::{MemoryObjectStore, StoredObject};
pub use s3::{EnvCredentials, S3ObjectStore, S3Settings};
