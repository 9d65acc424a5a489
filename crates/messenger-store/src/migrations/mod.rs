//! Versioned schema migrations
//!
//! Migration SQL lives under migrations/ and is embedded at compile time.
//! The runner applies pending migrations in order and refuses to proceed
//! when an applied migration's checksum has drifted.

pub mod checksums;
pub mod embedded;
pub mod runner;

pub use runner::apply_migrations;
