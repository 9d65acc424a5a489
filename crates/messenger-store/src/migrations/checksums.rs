//! Migration checksums

use sha2::{Digest, Sha256};

/// SHA256 hex checksum of a migration's SQL text
pub fn compute_checksum(sql: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(sql.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_is_stable() {
        let first = compute_checksum("CREATE TABLE t (x INTEGER)");
        let second = compute_checksum("CREATE TABLE t (x INTEGER)");

        assert_eq!(first, second);
        assert_eq!(first.len(), 64, "SHA256 hex digest is 64 characters");
    }

    #[test]
    fn test_checksum_detects_changes() {
        let original = compute_checksum("CREATE TABLE t (x INTEGER)");
        let edited = compute_checksum("CREATE TABLE t (y INTEGER)");

        assert_ne!(original, edited);
    }
}
