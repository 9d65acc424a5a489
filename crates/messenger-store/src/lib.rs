//! Messenger Store - SQLite persistence for the greeting registry
//!
//! This crate provides:
//! - Database connection management with WAL mode (db)
//! - Versioned, checksummed schema migrations (migrations)
//! - Row-level repository for registry entries (repo)
//! - YAML seed parsing, digests, and import (seed)
//! - The shared `GreetingStore` with its write-back committer thread
//!   (greeting_store, committer)

pub mod committer;
pub mod db;
pub mod errors;
pub mod greeting_store;
pub mod migrations;
pub mod repo;
pub mod seed;

pub use committer::WriteHandle;
pub use errors::Result;
pub use greeting_store::GreetingStore;
