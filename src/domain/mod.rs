//! Domain Layer
//!
//! Pure upload rules without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Manifest and per-file outcomes
//! - `value_objects/` - Fingerprint, ObjectKey, ManifestFormat
//! - `services/` - URL resolution, upload policy, manifest formatting
//! - `ports/` - Interface definitions for infrastructure (object store, events)

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
