// Integration tests for seed import into the configuration partition

use messenger_core::model::Partition;
use messenger_store::repo::RegistryRepo;
use messenger_store::seed::import_seed;
use rusqlite::Connection;
use std::path::PathBuf;

fn setup_test_db() -> Connection {
    let mut conn = Connection::open_in_memory().expect("Failed to create in-memory database");
    messenger_store::migrations::apply_migrations(&mut conn).unwrap();
    conn
}

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

#[test]
fn test_import_populates_configuration_partition() {
    // Given: A migrated database and a full seed
    let mut conn = setup_test_db();
    let path = fixtures_dir().join("seed_full.yaml");

    // When: The seed is imported
    let result = import_seed(&path, &mut conn);
    assert!(result.is_ok(), "Import should succeed: {:?}", result.err());

    // Then: All entries land in the configuration partition, in file order
    let entries = RegistryRepo::list_entries(&conn, Partition::Configuration).unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Mundo", "Monde", "Welt"]);

    // And: The operational partition stays empty
    let operational = RegistryRepo::list_entries(&conn, Partition::Operational).unwrap();
    assert!(operational.is_empty());
}

#[test]
fn test_reimport_converges_and_appends_provenance() {
    // Given: A database already seeded once
    let mut conn = setup_test_db();
    let path = fixtures_dir().join("seed_full.yaml");
    let first_digest = import_seed(&path, &mut conn).unwrap();

    // When: The same seed is imported again
    let second_digest = import_seed(&path, &mut conn).unwrap();

    // Then: The digest is stable and rows do not duplicate
    assert_eq!(first_digest, second_digest);
    let entry_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM registry_entries", [], |row| row.get(0))
        .unwrap();
    assert_eq!(entry_count, 3);

    // And: Each import left a provenance record
    let import_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM seed_imports", [], |row| row.get(0))
        .unwrap();
    assert_eq!(import_count, 2);
}

#[test]
fn test_import_overwrites_changed_greetings() {
    // Given: A seeded database where one greeting was modified out of band
    let mut conn = setup_test_db();
    let path = fixtures_dir().join("seed_full.yaml");
    import_seed(&path, &mut conn).unwrap();
    conn.execute(
        "UPDATE registry_entries SET greeting = 'stale' WHERE name = 'Mundo'",
        [],
    )
    .unwrap();

    // When: The seed is imported again
    import_seed(&path, &mut conn).unwrap();

    // Then: The seeded greeting wins
    let entry = RegistryRepo::get_entry(&conn, Partition::Configuration, "Mundo")
        .unwrap()
        .unwrap();
    assert_eq!(entry.greeting, "Hola Mundo!");
}

#[test]
fn test_rejected_seed_leaves_database_untouched() {
    // Given: A migrated database and a seed with duplicate names
    let mut conn = setup_test_db();
    let path = fixtures_dir().join("seed_duplicate_name.yaml");

    // When: The import is attempted
    let result = import_seed(&path, &mut conn);

    // Then: It fails and nothing is written
    assert!(result.is_err());
    let entry_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM registry_entries", [], |row| row.get(0))
        .unwrap();
    assert_eq!(entry_count, 0);
    let import_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM seed_imports", [], |row| row.get(0))
        .unwrap();
    assert_eq!(import_count, 0);
}

#[test]
fn test_missing_seed_file_is_an_io_error() {
    let mut conn = setup_test_db();
    let path = fixtures_dir().join("does_not_exist.yaml");

    let err = import_seed(&path, &mut conn).expect_err("Missing file must fail");

    assert_eq!(err.kind(), messenger_core::errors::MsgErrorKind::Io);
}
