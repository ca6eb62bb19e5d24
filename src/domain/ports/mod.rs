//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod object_store;
pub mod upload_events;

pub use object_store::{ObjectPut, ObjectStore, StoreError, StoreResult};
pub use upload_events::{NoopEventSink, UploadEvent, UploadEventSink};
