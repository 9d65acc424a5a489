//! Embedded migration definitions
//!
//! The SQL is compiled into the binary so a deployed store can never drift
//! from the code that runs against it.

/// A single schema migration
pub struct Migration {
    /// Stable identifier, also the file stem under migrations/
    pub id: &'static str,

    /// Full SQL, applied as one batch
    pub sql: &'static str,
}

/// All known migrations, in application order
pub fn all_migrations() -> Vec<Migration> {
    vec![
        Migration {
            id: "001_registry_schema",
            sql: include_str!("../../migrations/001_registry_schema.sql"),
        },
        Migration {
            id: "002_seed_provenance",
            sql: include_str!("../../migrations/002_seed_provenance.sql"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_ordered_and_unique() {
        let migrations = all_migrations();

        assert_eq!(migrations.len(), 2);

        let ids: Vec<&str> = migrations.iter().map(|m| m.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted, "Migrations must be listed in id order");

        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len(), "Migration ids must be unique");
    }

    #[test]
    fn test_migration_sql_is_non_empty() {
        for migration in all_migrations() {
            assert!(
                !migration.sql.trim().is_empty(),
                "Migration {} has empty SQL",
                migration.id
            );
        }
    }
}
