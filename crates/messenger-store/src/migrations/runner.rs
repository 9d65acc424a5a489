//! Migration runner
//!
//! Applies embedded migrations in order, one transaction each, recording
//! id, timestamp, and checksum in schema_version. Re-running is a no-op;
//! an applied migration whose SQL has changed is a checksum error.

#![allow(clippy::result_large_err)]

use crate::errors::{checksum_mismatch, from_rusqlite, migration_error, Result};
use crate::migrations::checksums::compute_checksum;
use crate::migrations::embedded::all_migrations;
use rusqlite::{Connection, OptionalExtension};

/// Apply all pending migrations to the connection
pub fn apply_migrations(conn: &mut Connection) -> Result<()> {
    create_schema_version_table(conn)?;

    for migration in all_migrations() {
        let checksum = compute_checksum(migration.sql);

        if let Some(recorded) = recorded_checksum(conn, migration.id)? {
            if recorded != checksum {
                return Err(checksum_mismatch(migration.id, &recorded, &checksum));
            }
            continue;
        }

        apply_one(conn, migration.id, migration.sql, &checksum)?;
    }

    Ok(())
}

fn create_schema_version_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY,
            migration_id TEXT NOT NULL UNIQUE,
            applied_at INTEGER NOT NULL,
            checksum TEXT NOT NULL
        )",
        [],
    )
    .map_err(from_rusqlite)?;
    Ok(())
}

fn recorded_checksum(conn: &Connection, migration_id: &str) -> Result<Option<String>> {
    conn.query_row(
        "SELECT checksum FROM schema_version WHERE migration_id = ?1",
        [migration_id],
        |row| row.get(0),
    )
    .optional()
    .map_err(from_rusqlite)
}

fn apply_one(conn: &mut Connection, migration_id: &str, sql: &str, checksum: &str) -> Result<()> {
    let tx = conn.transaction().map_err(from_rusqlite)?;

    tx.execute_batch(sql)
        .map_err(|e| migration_error(migration_id, &e.to_string()))?;

    let applied_at = chrono::Utc::now().timestamp();
    tx.execute(
        "INSERT INTO schema_version (migration_id, applied_at, checksum) VALUES (?1, ?2, ?3)",
        rusqlite::params![migration_id, applied_at, checksum],
    )
    .map_err(from_rusqlite)?;

    tx.commit().map_err(from_rusqlite)?;
    Ok(())
}
