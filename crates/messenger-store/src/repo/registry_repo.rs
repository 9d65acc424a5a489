//! SQLite repository for registry entries
//!
//! Rows are keyed by ("partition", name). Timestamps are stored as epoch
//! seconds. Listing follows rowid, so entries come back in the order they
//! were first inserted even after later overwrites.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use chrono::{DateTime, Utc};
use messenger_core::model::{Partition, RegistryEntry};
use rusqlite::{Connection, OptionalExtension, Row, Transaction};

/// SQLite repository for registry entries
pub struct RegistryRepo;

impl RegistryRepo {
    /// Insert or update an entry in a partition
    ///
    /// On conflict the greeting and updated_at are replaced; created_at and
    /// the row's position are preserved.
    pub fn upsert_entry(
        conn: &Connection,
        partition: Partition,
        entry: &RegistryEntry,
    ) -> Result<()> {
        conn.execute(
            "INSERT INTO registry_entries (\"partition\", name, greeting, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(\"partition\", name) DO UPDATE SET
                greeting = excluded.greeting,
                updated_at = excluded.updated_at",
            rusqlite::params![
                partition.as_str(),
                entry.name,
                entry.greeting,
                entry.created_at.timestamp(),
                entry.updated_at.timestamp(),
            ],
        )
        .map_err(from_rusqlite)?;
        Ok(())
    }

    /// Transaction variant of [`Self::upsert_entry`]
    pub fn upsert_entry_tx(
        tx: &Transaction,
        partition: Partition,
        entry: &RegistryEntry,
    ) -> Result<()> {
        tx.execute(
            "INSERT INTO registry_entries (\"partition\", name, greeting, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(\"partition\", name) DO UPDATE SET
                greeting = excluded.greeting,
                updated_at = excluded.updated_at",
            rusqlite::params![
                partition.as_str(),
                entry.name,
                entry.greeting,
                entry.created_at.timestamp(),
                entry.updated_at.timestamp(),
            ],
        )
        .map_err(from_rusqlite)?;
        Ok(())
    }

    /// Look up one entry by partition and name
    pub fn get_entry(
        conn: &Connection,
        partition: Partition,
        name: &str,
    ) -> Result<Option<RegistryEntry>> {
        let mut stmt = conn
            .prepare(
                "SELECT name, greeting, created_at, updated_at
                 FROM registry_entries
                 WHERE \"partition\" = ?1 AND name = ?2",
            )
            .map_err(from_rusqlite)?;

        stmt.query_row(rusqlite::params![partition.as_str(), name], row_to_entry)
            .optional()
            .map_err(from_rusqlite)
    }

    /// List every entry in a partition, in first-insertion order
    pub fn list_entries(conn: &Connection, partition: Partition) -> Result<Vec<RegistryEntry>> {
        let mut stmt = conn
            .prepare(
                "SELECT name, greeting, created_at, updated_at
                 FROM registry_entries
                 WHERE \"partition\" = ?1
                 ORDER BY rowid",
            )
            .map_err(from_rusqlite)?;

        let entries = stmt
            .query_map([partition.as_str()], row_to_entry)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(entries)
    }

    /// Delete every entry in a partition, returning how many were removed
    pub fn clear_partition_tx(tx: &Transaction, partition: Partition) -> Result<usize> {
        tx.execute(
            "DELETE FROM registry_entries WHERE \"partition\" = ?1",
            [partition.as_str()],
        )
        .map_err(from_rusqlite)
    }
}

fn row_to_entry(row: &Row<'_>) -> rusqlite::Result<RegistryEntry> {
    let name: String = row.get(0)?;
    let greeting: String = row.get(1)?;
    let created_at: i64 = row.get(2)?;
    let updated_at: i64 = row.get(3)?;

    let mut entry = RegistryEntry::new(name, greeting);
    entry.created_at = DateTime::from_timestamp(created_at, 0).unwrap_or_else(Utc::now);
    entry.updated_at = DateTime::from_timestamp(updated_at, 0).unwrap_or_else(Utc::now);
    Ok(entry)
}
