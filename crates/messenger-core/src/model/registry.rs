use crate::errors::{RegistryError, Result};
use crate::model::RegistryEntry;

/// Insertion-ordered collection of registry entries, keyed by name
///
/// Upserting an existing name replaces the greeting in place; the entry keeps
/// its original position and its created_at timestamp.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Look up an entry by name
    pub fn get(&self, name: &str) -> Option<&RegistryEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Look up an entry by name, failing if it is absent
    pub fn require(&self, name: &str) -> Result<&RegistryEntry> {
        self.get(name).ok_or_else(|| RegistryError::EntryNotFound {
            name: name.to_string(),
        })
    }

    /// Insert a new entry or replace the greeting of an existing one
    pub fn upsert(&mut self, entry: RegistryEntry) {
        match self.entries.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => {
                // Position and created_at survive the overwrite
                existing.greeting = entry.greeting;
                existing.updated_at = entry.updated_at;
            }
            None => self.entries.push(entry),
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the registry has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_inserts_new_entry() {
        let mut registry = Registry::new();
        registry.upsert(RegistryEntry::new("Alice", "Hello Alice"));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("Alice").unwrap().greeting, "Hello Alice");
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut registry = Registry::new();
        registry.upsert(RegistryEntry::new("Alice", "Hello Alice"));
        registry.upsert(RegistryEntry::new("Bob", "Hello Bob"));
        registry.upsert(RegistryEntry::new("Alice", "Bonjour Alice"));

        assert_eq!(registry.len(), 2);
        let names: Vec<&str> = registry.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"], "Overwrite must not reorder");
        assert_eq!(registry.get("Alice").unwrap().greeting, "Bonjour Alice");
    }

    #[test]
    fn test_upsert_keeps_created_at() {
        let mut registry = Registry::new();
        registry.upsert(RegistryEntry::new("Alice", "Hello Alice"));
        let created = registry.get("Alice").unwrap().created_at;

        registry.upsert(RegistryEntry::new("Alice", "Bonjour Alice"));
        assert_eq!(registry.get("Alice").unwrap().created_at, created);
    }

    #[test]
    fn test_require_missing_entry() {
        let registry = Registry::new();
        let err = registry.require("Nobody").unwrap_err();
        assert_eq!(
            err,
            RegistryError::EntryNotFound {
                name: "Nobody".to_string()
            }
        );
    }
}
