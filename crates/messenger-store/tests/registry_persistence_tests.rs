// Integration tests for registry row persistence across connections

use messenger_core::model::{Partition, RegistryEntry};
use messenger_store::repo::RegistryRepo;
use messenger_store::{db, migrations};
use std::path::Path;
use tempfile::TempDir;

fn open_migrated(path: &Path) -> rusqlite::Connection {
    let mut conn = db::open(path).unwrap();
    db::configure(&conn).unwrap();
    migrations::apply_migrations(&mut conn).unwrap();
    conn
}

#[test]
fn test_entries_survive_reopen() {
    // Given: A database file with one entry per partition
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("registry.db");
    {
        let conn = open_migrated(&db_path);
        let configured = RegistryEntry::new("Mundo", "Hola Mundo!");
        let written = RegistryEntry::new("Alice", "Hello Alice");
        RegistryRepo::upsert_entry(&conn, Partition::Configuration, &configured).unwrap();
        RegistryRepo::upsert_entry(&conn, Partition::Operational, &written).unwrap();
    }

    // When: The file is reopened on a fresh connection
    let conn = open_migrated(&db_path);

    // Then: Both entries come back in their partitions
    let configured = RegistryRepo::get_entry(&conn, Partition::Configuration, "Mundo")
        .unwrap()
        .expect("Configured entry should survive reopen");
    assert_eq!(configured.greeting, "Hola Mundo!");

    let written = RegistryRepo::get_entry(&conn, Partition::Operational, "Alice")
        .unwrap()
        .expect("Operational entry should survive reopen");
    assert_eq!(written.greeting, "Hello Alice");
}

#[test]
fn test_same_name_lives_in_both_partitions() {
    let dir = TempDir::new().unwrap();
    let conn = open_migrated(&dir.path().join("registry.db"));

    let configured = RegistryEntry::new("Alice", "Howdy Alice!");
    let written = RegistryEntry::new("Alice", "Hello Alice");
    RegistryRepo::upsert_entry(&conn, Partition::Configuration, &configured).unwrap();
    RegistryRepo::upsert_entry(&conn, Partition::Operational, &written).unwrap();

    let from_config = RegistryRepo::get_entry(&conn, Partition::Configuration, "Alice")
        .unwrap()
        .unwrap();
    let from_operational = RegistryRepo::get_entry(&conn, Partition::Operational, "Alice")
        .unwrap()
        .unwrap();

    assert_eq!(from_config.greeting, "Howdy Alice!");
    assert_eq!(from_operational.greeting, "Hello Alice");
}

#[test]
fn test_insertion_order_survives_reopen_and_overwrite() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("registry.db");
    {
        let conn = open_migrated(&db_path);
        for name in ["Welt", "Mundo", "Monde"] {
            let entry = RegistryEntry::new(name, format!("Hello {}", name));
            RegistryRepo::upsert_entry(&conn, Partition::Configuration, &entry).unwrap();
        }
        // Overwrite the first entry after the others were added
        let replacement = RegistryEntry::new("Welt", "Hallo Welt!");
        RegistryRepo::upsert_entry(&conn, Partition::Configuration, &replacement).unwrap();
    }

    let conn = open_migrated(&db_path);
    let names: Vec<String> = RegistryRepo::list_entries(&conn, Partition::Configuration)
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();

    assert_eq!(names, vec!["Welt", "Mundo", "Monde"]);
}
