//! Seed file format
//!
//! ```yaml
//! schema_version: 0
//! entries:
//!   - name: Mundo
//!     greeting: "Hola Mundo!"
//! ```

use serde::{Deserialize, Serialize};

/// Top-level structure of a seed file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedFile {
    /// Format version; this parser accepts only 0
    pub schema_version: u32,

    /// Greetings destined for the configuration partition
    pub entries: Vec<SeedEntry>,
}

/// One configured greeting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedEntry {
    /// Name the greeting is stored under
    pub name: String,

    /// Greeting text returned for that name
    pub greeting: String,
}
