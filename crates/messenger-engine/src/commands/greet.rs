//! Greeting request orchestration
//!
//! The request path:
//! 1. Look up the name in the configuration partition
//! 2. Fall back to the default greeting when the name is absent (or the
//!    read failed)
//! 3. Queue a write-back of the served greeting to the operational
//!    partition
//!
//! Step 3 always runs, hit or miss, and never blocks the response.

use messenger_core::{log_op_end, log_op_start};
use messenger_core_types::RequestId;
use messenger_store::{GreetingStore, WriteHandle};
use std::sync::Arc;
use std::time::Instant;

/// Prefix of the greeting served for names with no configured entry
const DEFAULT_GREETING_PREFIX: &str = "Hello ";

/// Response to one greeting request
pub struct GreetingResponse {
    /// The greeting that was served
    pub greeting: String,

    /// Handle to the queued write-back; drop it for fire-and-forget
    pub write_back: WriteHandle,
}

/// Orchestrates greeting requests over a shared store
pub struct GreetingService {
    store: Arc<GreetingStore>,
}

impl GreetingService {
    pub fn new(store: Arc<GreetingStore>) -> Self {
        Self { store }
    }

    /// Serve one greeting request
    ///
    /// This never fails: a missing or unreadable configuration entry falls
    /// back to the default greeting, and the write-back is asynchronous.
    pub fn handle_request(&self, name: &str) -> GreetingResponse {
        let request_id = RequestId::new();
        let started = Instant::now();
        log_op_start!("handle_request", name = name, request_id = %request_id);

        let greeting = match self.store.read(name) {
            Some(entry) => entry.greeting,
            None => format!("{}{}", DEFAULT_GREETING_PREFIX, name),
        };

        let write_back = self.store.write(name, &greeting);

        log_op_end!(
            "handle_request",
            duration_ms = started.elapsed().as_millis() as u64,
            request_id = %request_id
        );

        GreetingResponse {
            greeting,
            write_back,
        }
    }

    /// Queue a reset of the operational partition
    ///
    /// Run once at startup, before the first request. Configured greetings
    /// are untouched.
    pub fn initialize(&self) -> WriteHandle {
        tracing::info!(
            component = module_path!(),
            op = "initialize",
            "Preparing to initialize the greeting registry"
        );
        self.store.initialize()
    }
}
