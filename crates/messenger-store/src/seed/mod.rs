//! Seed file support
//!
//! Operators describe the configuration partition in YAML. The parser
//! validates the format, the digest makes imports reproducible, and the
//! importer applies everything in one transaction.

pub mod digest;
pub mod format;
pub mod importer;
pub mod parser;

pub use digest::compute_seed_digest;
pub use format::{SeedEntry, SeedFile};
pub use importer::import_seed;
pub use parser::{parse_seed_file, parse_seed_str};
