//! Password digest
//!
//! The credential store holds unsalted SHA-256 hex digests; registration and
//! login must both produce exactly this transform or no stored credential
//! would ever match again.

use sha2::{Digest, Sha256};

/// One-way digest of a plaintext password: 64 lowercase hex characters.
pub fn password_digest(plaintext: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    hex::encode(hasher.finalize())
}
