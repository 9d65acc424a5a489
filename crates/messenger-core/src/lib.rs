//! Messenger Core - greeting registry model and tabular documents
//!
//! This crate provides the foundational data structures and operations for
//! the messenger service, including:
//! - Registry model (entries, partitions, insertion-ordered collections)
//! - Tabular document parsing with header-width normalization
//! - JSON and XML rendering of tabular documents
//! - Structured error facility with stable error codes
//! - Logging facility with operation lifecycle macros

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod render;
pub mod tabular;

// Re-export commonly used types
pub use errors::{MsgError, MsgErrorKind, RegistryError, Result};
pub use model::{Partition, Registry, RegistryEntry};
pub use tabular::TabularDocument;
