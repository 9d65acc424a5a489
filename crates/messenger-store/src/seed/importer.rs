//! Seed importer
//!
//! Imports a seed into the configuration partition:
//! 1. Parse and validate the YAML
//! 2. Compute the seed digest
//! 3. Upsert every entry inside one transaction
//! 4. Record the import in seed_imports
//!
//! Re-importing the same seed is harmless; the upserts converge on the same
//! rows and a second provenance record is appended.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use crate::repo::RegistryRepo;
use crate::seed::digest::compute_seed_digest;
use crate::seed::parser::parse_seed_file;
use messenger_core::model::{Partition, RegistryEntry};
use rusqlite::Connection;
use std::path::Path;

/// Import a seed file, returning its digest
pub fn import_seed(path: &Path, conn: &mut Connection) -> Result<String> {
    let seed = parse_seed_file(path)?;
    let seed_digest = compute_seed_digest(&seed);

    let tx = conn.transaction().map_err(from_rusqlite)?;

    for seed_entry in &seed.entries {
        let entry = RegistryEntry::new(seed_entry.name.clone(), seed_entry.greeting.clone());
        RegistryRepo::upsert_entry_tx(&tx, Partition::Configuration, &entry)?;
    }

    let imported_at = chrono::Utc::now().timestamp();
    tx.execute(
        "INSERT INTO seed_imports (seed_digest, entry_count, imported_at) VALUES (?1, ?2, ?3)",
        rusqlite::params![seed_digest, seed.entries.len() as i64, imported_at],
    )
    .map_err(from_rusqlite)?;

    tx.commit().map_err(from_rusqlite)?;

    Ok(seed_digest)
}
