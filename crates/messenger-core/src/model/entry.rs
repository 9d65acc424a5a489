use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// RegistryEntry - one named greeting in the registry
///
/// Entries live in exactly one partition. The configuration partition holds
/// operator-seeded defaults; the operational partition holds greetings the
/// service wrote back at request time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryEntry {
    /// Name the greeting is stored under (unique within a partition)
    pub name: String,

    /// The greeting text itself
    pub greeting: String,

    /// Timestamp when this entry was first stored
    pub created_at: DateTime<Utc>,

    /// Timestamp when this entry was last updated
    pub updated_at: DateTime<Utc>,
}

impl RegistryEntry {
    /// Create a new entry with current timestamps
    pub fn new(name: impl Into<String>, greeting: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            greeting: greeting.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the greeting text and bump the update timestamp
    pub fn set_greeting(&mut self, greeting: impl Into<String>) {
        self.greeting = greeting.into();
        self.updated_at = Utc::now();
    }
}
