use sha2::{Digest, Sha256};

/// Hex SHA-256 of a scheme's raw bytes. Identifies a document in batch reports.
#[must_use]
pub fn hash_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}
