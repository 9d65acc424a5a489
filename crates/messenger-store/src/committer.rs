//! Write-back committer
//!
//! Registry writes never happen on the request path. They are queued here
//! and applied on a dedicated thread that owns its own connection, one
//! transaction per write. A failed write is logged with its write id and
//! reported only through the write's [`WriteHandle`]; nothing propagates
//! back into request handling.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use crate::repo::RegistryRepo;
use messenger_core::errors::{MsgError, MsgErrorKind};
use messenger_core::model::{Partition, RegistryEntry};
use messenger_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::Connection;
use std::sync::mpsc;
use std::time::Instant;
use uuid::Uuid;

/// One queued registry write
pub(crate) enum WriteRequest {
    /// Insert or replace an entry in a partition
    Upsert {
        partition: Partition,
        entry: RegistryEntry,
        done: mpsc::Sender<Result<()>>,
    },

    /// Wipe the operational partition
    Initialize { done: mpsc::Sender<Result<()>> },
}

/// Handle to one queued write
///
/// Dropping the handle leaves the write fire-and-forget; the committer
/// still applies it. Call [`WriteHandle::wait`] to block until the write
/// has been applied and observe its outcome.
pub struct WriteHandle {
    done: mpsc::Receiver<Result<()>>,
}

impl WriteHandle {
    pub(crate) fn new(done: mpsc::Receiver<Result<()>>) -> Self {
        Self { done }
    }

    /// Block until the committer has applied this write
    pub fn wait(self) -> Result<()> {
        match self.done.recv() {
            Ok(outcome) => outcome,
            Err(_) => Err(MsgError::new(MsgErrorKind::Concurrency)
                .with_op("write_back")
                .with_message("Committer exited before acknowledging the write")),
        }
    }
}

/// Committer loop: apply queued writes until the queue closes
pub(crate) fn run(mut conn: Connection, queue: mpsc::Receiver<WriteRequest>) {
    for request in queue {
        match request {
            WriteRequest::Upsert {
                partition,
                entry,
                done,
            } => {
                let write_id = Uuid::now_v7().to_string();
                let started = Instant::now();
                log_op_start!(
                    "registry_write",
                    write_id = %write_id,
                    name = %entry.name,
                    partition = partition.as_str()
                );

                let outcome = apply_upsert(&mut conn, partition, &entry);
                let duration_ms = started.elapsed().as_millis() as u64;
                match &outcome {
                    Ok(()) => {
                        log_op_end!(
                            "registry_write",
                            duration_ms = duration_ms,
                            write_id = %write_id
                        );
                    }
                    Err(e) => {
                        log_op_error!(
                            "registry_write",
                            e.clone(),
                            duration_ms = duration_ms,
                            write_id = %write_id
                        );
                    }
                }

                // The handle may already be dropped
                done.send(outcome).ok();
            }
            WriteRequest::Initialize { done } => {
                let started = Instant::now();
                log_op_start!("registry_initialize");

                let outcome = apply_initialize(&mut conn);
                let duration_ms = started.elapsed().as_millis() as u64;
                match &outcome {
                    Ok(()) => {
                        log_op_end!("registry_initialize", duration_ms = duration_ms);
                    }
                    Err(e) => {
                        log_op_error!(
                            "registry_initialize",
                            e.clone(),
                            duration_ms = duration_ms
                        );
                    }
                }

                done.send(outcome).ok();
            }
        }
    }
}

fn apply_upsert(conn: &mut Connection, partition: Partition, entry: &RegistryEntry) -> Result<()> {
    let tx = conn.transaction().map_err(from_rusqlite)?;
    RegistryRepo::upsert_entry_tx(&tx, partition, entry)?;
    tx.commit().map_err(from_rusqlite)?;
    Ok(())
}

fn apply_initialize(conn: &mut Connection) -> Result<()> {
    let tx = conn.transaction().map_err(from_rusqlite)?;
    RegistryRepo::clear_partition_tx(&tx, Partition::Operational)?;
    tx.commit().map_err(from_rusqlite)?;
    Ok(())
}
