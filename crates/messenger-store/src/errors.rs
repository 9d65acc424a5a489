//! Store error helpers
//!
//! The store surfaces everything as `MsgError` from messenger-core. These
//! helpers keep kind, operation, and message conventions consistent across
//! the persistence modules.

#![allow(clippy::result_large_err)]

use messenger_core::errors::{MsgError, MsgErrorKind};

/// Result type for store operations
pub type Result<T> = std::result::Result<T, MsgError>;

/// Migration failed to apply
pub fn migration_error(migration_id: &str, message: &str) -> MsgError {
    MsgError::new(MsgErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, message))
}

/// An already-applied migration no longer matches its recorded checksum
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> MsgError {
    MsgError::new(MsgErrorKind::ConstraintViolation)
        .with_op("migration_checksum")
        .with_message(format!(
            "Migration {} checksum mismatch: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Seed file failed validation
pub fn seed_validation(message: &str) -> MsgError {
    MsgError::new(MsgErrorKind::InvalidInput)
        .with_op("seed_parse")
        .with_message(message)
}

/// Wrap a SQLite error
pub fn from_rusqlite(err: rusqlite::Error) -> MsgError {
    MsgError::new(MsgErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Wrap an I/O error with the operation it interrupted
pub fn io_error(operation: &str, err: std::io::Error) -> MsgError {
    MsgError::new(MsgErrorKind::Io)
        .with_op(operation)
        .with_message(err.to_string())
}
