//! Shared greeting store
//!
//! One store instance serves the whole process. Reads go through a mutex-held
//! connection on the caller's thread; writes are queued to the committer
//! thread, which owns a second connection to the same database file. The
//! store is Sync, so request handlers share it behind an `Arc`.

#![allow(clippy::result_large_err)]

use crate::committer::{self, WriteHandle, WriteRequest};
use crate::db;
use crate::errors::{io_error, Result};
use crate::migrations::apply_migrations;
use crate::repo::{hydration, RegistryRepo};
use messenger_core::errors::{MsgError, MsgErrorKind};
use messenger_core::model::{Partition, Registry, RegistryEntry};
use rusqlite::Connection;
use std::path::Path;
use std::sync::{mpsc, Mutex, MutexGuard};
use std::thread;

pub struct GreetingStore {
    reader: Mutex<Connection>,
    writes: Option<mpsc::Sender<WriteRequest>>,
    committer: Option<thread::JoinHandle<()>>,
}

impl GreetingStore {
    /// Open the store at a database path
    ///
    /// Applies pending migrations, then starts the committer thread with its
    /// own connection.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = db::open(path.as_ref())?;
        db::configure(&reader)?;
        apply_migrations(&mut reader)?;

        let writer = db::open(path.as_ref())?;
        db::configure(&writer)?;

        let (writes, queue) = mpsc::channel();
        let committer = thread::Builder::new()
            .name("registry-committer".to_string())
            .spawn(move || committer::run(writer, queue))
            .map_err(|e| io_error("spawn_committer", e))?;

        Ok(Self {
            reader: Mutex::new(reader),
            writes: Some(writes),
            committer: Some(committer),
        })
    }

    /// Request-path lookup of a configured greeting
    ///
    /// A failed read is logged and treated as absence so the caller can fall
    /// back to the default greeting.
    pub fn read(&self, name: &str) -> Option<RegistryEntry> {
        match self.entry(Partition::Configuration, name) {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(
                    component = module_path!(),
                    op = "registry_read",
                    name = name,
                    error = %e,
                    "Reading greeting failed; treating as absent"
                );
                None
            }
        }
    }

    /// Look up one entry in a partition
    pub fn entry(&self, partition: Partition, name: &str) -> Result<Option<RegistryEntry>> {
        let conn = self.lock_reader()?;
        RegistryRepo::get_entry(&conn, partition, name)
    }

    /// Load a whole partition in insertion order
    pub fn entries(&self, partition: Partition) -> Result<Registry> {
        let conn = self.lock_reader()?;
        hydration::load_registry(&conn, partition)
    }

    /// Queue a write-back of a greeting to the operational partition
    ///
    /// Returns immediately. Drop the handle for fire-and-forget, or call
    /// [`WriteHandle::wait`] to block until the write has been applied.
    pub fn write(&self, name: &str, greeting: &str) -> WriteHandle {
        let entry = RegistryEntry::new(name, greeting);
        self.submit(|done| WriteRequest::Upsert {
            partition: Partition::Operational,
            entry,
            done,
        })
    }

    /// Queue a wipe of the operational partition
    ///
    /// Configured greetings are untouched; only written-back entries go.
    pub fn initialize(&self) -> WriteHandle {
        self.submit(|done| WriteRequest::Initialize { done })
    }

    fn submit(
        &self,
        build: impl FnOnce(mpsc::Sender<Result<()>>) -> WriteRequest,
    ) -> WriteHandle {
        let (done, handle_rx) = mpsc::channel();
        let request = build(done);
        if let Some(writes) = &self.writes {
            // A failed send drops the request and its done sender, so the
            // handle reports the committer as gone.
            writes.send(request).ok();
        }
        WriteHandle::new(handle_rx)
    }

    fn lock_reader(&self) -> Result<MutexGuard<'_, Connection>> {
        self.reader.lock().map_err(|_| {
            MsgError::new(MsgErrorKind::Concurrency)
                .with_op("registry_read")
                .with_message("Reader connection mutex poisoned")
        })
    }
}

impl Drop for GreetingStore {
    fn drop(&mut self) {
        // Closing the queue lets the committer drain outstanding writes
        // and exit.
        drop(self.writes.take());
        if let Some(committer) = self.committer.take() {
            committer.join().ok();
        }
    }
}
