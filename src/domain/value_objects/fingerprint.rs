//! Content Fingerprint Value Object
//!
//! A fixed-length hex digest of a file's bytes, spliced into versioned
//! object keys for cache busting.

use std::fmt;
use std::io::{self, Read};

use sha2::{Digest, Sha256};

/// Number of digest bytes kept in a fingerprint (32 hex chars)
const FINGERPRINT_BYTES: usize = 16;

/// Read buffer size for streaming hashes
const CHUNK_SIZE: usize = 64 * 1024;

/// Content fingerprint value object
///
/// The first 16 bytes of the SHA-256 digest, lowercase hex encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Length of the hex string
    pub const LEN: usize = FINGERPRINT_BYTES * 2;

    /// Fingerprint a byte stream in a single pass.
    ///
    /// The reader is consumed to EOF; the content is never buffered whole.
    pub fn from_reader<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut hasher = Sha256::new();
        let mut buf = vec![0u8; CHUNK_SIZE];
        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            hasher.update(&buf[..n]);
        }
        Ok(Self::from_digest(&hasher.finalize()))
    }

    /// Fingerprint an in-memory buffer
    pub fn from_bytes(content: &[u8]) -> Self {
        Self::from_digest(&Sha256::digest(content))
    }

    fn from_digest(digest: &[u8]) -> Self {
        let hex = digest[..FINGERPRINT_BYTES]
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect();
        Self(hex)
    }

    /// Get the hex string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
