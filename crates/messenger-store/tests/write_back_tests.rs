// Integration tests for the GreetingStore write-back path
//
// These run against real database files: the reader connection and the
// committer's writer connection only share state through the file.

use messenger_core::model::Partition;
use messenger_store::GreetingStore;
use std::sync::Arc;
use tempfile::TempDir;

fn open_store(dir: &TempDir) -> GreetingStore {
    GreetingStore::open(dir.path().join("registry.db")).expect("Store should open")
}

#[test]
fn test_write_lands_in_operational_partition() {
    // Given: An open store
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);

    // When: A write-back is queued and waited on
    store.write("Alice", "Hello Alice").wait().unwrap();

    // Then: The entry is visible through the reader connection
    let entry = store
        .entry(Partition::Operational, "Alice")
        .unwrap()
        .expect("Written entry should be readable");
    assert_eq!(entry.greeting, "Hello Alice");

    // And: The configuration partition is untouched
    assert!(store
        .entry(Partition::Configuration, "Alice")
        .unwrap()
        .is_none());
}

#[test]
fn test_dropped_handle_still_applies_the_write() {
    // Given: An open store
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);

    // When: A handle is dropped immediately and a later write is waited on
    drop(store.write("Alice", "Hello Alice"));
    store.write("Bob", "Hello Bob").wait().unwrap();

    // Then: The queue is FIFO, so the first write has also been applied
    assert!(store
        .entry(Partition::Operational, "Alice")
        .unwrap()
        .is_some());
}

#[test]
fn test_repeated_writes_converge_on_one_row() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);

    store.write("Alice", "Hello Alice").wait().unwrap();
    store.write("Alice", "Hello Alice").wait().unwrap();
    store.write("Alice", "Hello Alice").wait().unwrap();

    let entries = store.entries(Partition::Operational).unwrap();
    assert_eq!(entries.len(), 1, "Same-name writes must upsert, not append");
}

#[test]
fn test_concurrent_writers_share_one_store() {
    // Given: One store shared by several threads
    let dir = TempDir::new().unwrap();
    let store = Arc::new(open_store(&dir));

    // When: They all write the same name at once
    let threads: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || store.write("Alice", "Hello Alice").wait())
        })
        .collect();
    for thread in threads {
        thread.join().unwrap().unwrap();
    }

    // Then: The partition holds exactly one row for the name
    let entries = store.entries(Partition::Operational).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries.get("Alice").unwrap().greeting, "Hello Alice");
}

#[test]
fn test_initialize_wipes_only_the_operational_partition() {
    // Given: A store with entries in both partitions
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);
    {
        // Seed the configuration partition through a separate connection
        let mut conn = messenger_store::db::open(&dir.path().join("registry.db")).unwrap();
        messenger_store::db::configure(&conn).unwrap();
        let tx = conn.transaction().unwrap();
        messenger_store::repo::RegistryRepo::upsert_entry_tx(
            &tx,
            Partition::Configuration,
            &messenger_core::model::RegistryEntry::new("Mundo", "Hola Mundo!"),
        )
        .unwrap();
        tx.commit().unwrap();
    }
    store.write("Alice", "Hello Alice").wait().unwrap();

    // When: The store is initialized
    store.initialize().wait().unwrap();

    // Then: The operational partition is empty, the configured entry remains
    assert!(store.entries(Partition::Operational).unwrap().is_empty());
    assert_eq!(
        store
            .entry(Partition::Configuration, "Mundo")
            .unwrap()
            .expect("Configured entry must survive initialization")
            .greeting,
        "Hola Mundo!"
    );
}

#[test]
fn test_entries_survive_store_reopen() {
    // Given: A store that wrote and was dropped (joining its committer)
    let dir = TempDir::new().unwrap();
    {
        let store = open_store(&dir);
        store.write("Alice", "Hello Alice").wait().unwrap();
    }

    // When: The store is reopened
    let store = open_store(&dir);

    // Then: The written entry is still there
    assert!(store
        .entry(Partition::Operational, "Alice")
        .unwrap()
        .is_some());
}
