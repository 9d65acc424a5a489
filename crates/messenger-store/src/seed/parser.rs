//! Seed parsing and validation

#![allow(clippy::result_large_err)]

use crate::errors::{io_error, seed_validation, Result};
use crate::seed::format::SeedFile;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Parse and validate a seed file from disk
pub fn parse_seed_file(path: &Path) -> Result<SeedFile> {
    let content = fs::read_to_string(path).map_err(|e| io_error("seed_read", e))?;
    parse_seed_str(&content)
}

/// Parse and validate seed YAML from a string
pub fn parse_seed_str(content: &str) -> Result<SeedFile> {
    let seed: SeedFile = serde_yaml::from_str(content)
        .map_err(|e| seed_validation(&format!("YAML parse error: {}", e)))?;
    validate_seed(&seed)?;
    Ok(seed)
}

/// Structural checks beyond what deserialization enforces
fn validate_seed(seed: &SeedFile) -> Result<()> {
    if seed.schema_version != 0 {
        return Err(seed_validation(&format!(
            "Unsupported schema_version: {}. Expected 0",
            seed.schema_version
        )));
    }

    let mut names = HashSet::new();
    for entry in &seed.entries {
        if entry.name.is_empty() {
            return Err(seed_validation("Seed entry has an empty name"));
        }
        if entry.greeting.is_empty() {
            return Err(seed_validation(&format!(
                "Seed entry '{}' has an empty greeting",
                entry.name
            )));
        }
        if !names.insert(entry.name.as_str()) {
            return Err(seed_validation(&format!(
                "Duplicate entry name: {}",
                entry.name
            )));
        }
    }

    Ok(())
}
