//! Database connection management

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

/// Open a connection to a SQLite database file
pub fn open(path: &Path) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory connection, mainly for tests
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Apply the connection settings every store connection needs
///
/// WAL keeps the reader connection responsive while the committer writes.
/// The busy timeout covers the moment both connections touch the file.
pub fn configure(conn: &Connection) -> Result<()> {
    conn.execute("PRAGMA foreign_keys = ON", [])
        .map_err(from_rusqlite)?;
    // journal_mode returns a result row, so it cannot go through execute()
    conn.pragma_update(None, "journal_mode", "WAL")
        .map_err(from_rusqlite)?;
    conn.busy_timeout(Duration::from_secs(5))
        .map_err(from_rusqlite)?;
    Ok(())
}
