//! Seed digests
//!
//! A seed's digest identifies its content, not its formatting: entries are
//! sorted by name before hashing so two files that configure the same
//! greetings in a different order produce the same digest.

use crate::seed::format::SeedFile;
use serde::Serialize;
use sha2::{Digest, Sha256};

#[derive(Serialize)]
struct CanonicalSeed {
    schema_version: u32,
    entries: Vec<CanonicalEntry>,
}

#[derive(Serialize, PartialEq, Eq, PartialOrd, Ord)]
struct CanonicalEntry {
    name: String,
    greeting: String,
}

/// SHA256 hex digest of the canonicalized seed
pub fn compute_seed_digest(seed: &SeedFile) -> String {
    let canonical = canonicalize(seed);
    let json =
        serde_json::to_string(&canonical).expect("Canonical seed serialization is infallible");
    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    hex::encode(hasher.finalize())
}

fn canonicalize(seed: &SeedFile) -> CanonicalSeed {
    let mut entries: Vec<CanonicalEntry> = seed
        .entries
        .iter()
        .map(|e| CanonicalEntry {
            name: e.name.clone(),
            greeting: e.greeting.clone(),
        })
        .collect();
    entries.sort();

    CanonicalSeed {
        schema_version: seed.schema_version,
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::format::SeedEntry;

    fn seed_with(entries: Vec<(&str, &str)>) -> SeedFile {
        SeedFile {
            schema_version: 0,
            entries: entries
                .into_iter()
                .map(|(name, greeting)| SeedEntry {
                    name: name.to_string(),
                    greeting: greeting.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_digest_ignores_entry_order() {
        let forward = seed_with(vec![("Alice", "Hello Alice"), ("Bob", "Hello Bob")]);
        let backward = seed_with(vec![("Bob", "Hello Bob"), ("Alice", "Hello Alice")]);

        assert_eq!(
            compute_seed_digest(&forward),
            compute_seed_digest(&backward)
        );
    }

    #[test]
    fn test_digest_changes_with_content() {
        let original = seed_with(vec![("Alice", "Hello Alice")]);
        let edited = seed_with(vec![("Alice", "Hi Alice")]);

        assert_ne!(compute_seed_digest(&original), compute_seed_digest(&edited));
    }

    #[test]
    fn test_digest_is_hex_sha256() {
        let digest = compute_seed_digest(&seed_with(vec![("Alice", "Hello Alice")]));

        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
