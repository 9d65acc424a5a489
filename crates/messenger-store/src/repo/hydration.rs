//! Hydration - load persisted rows back into the in-memory model

#![allow(clippy::result_large_err)]

use crate::errors::Result;
use crate::repo::RegistryRepo;
use messenger_core::model::{Partition, Registry};
use rusqlite::Connection;

/// Load one partition into a [`Registry`], preserving insertion order
pub fn load_registry(conn: &Connection, partition: Partition) -> Result<Registry> {
    let mut registry = Registry::new();
    for entry in RegistryRepo::list_entries(conn, partition)? {
        registry.upsert(entry);
    }
    Ok(registry)
}
