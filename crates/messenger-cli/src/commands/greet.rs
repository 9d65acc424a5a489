//! Greet command
//!
//! Usage: messenger greet <NAME> [--db <FILE>] [--wait]

use clap::Args;
use messenger_engine::GreetingService;
use messenger_store::GreetingStore;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct GreetArgs {
    /// Name to greet
    pub name: String,

    /// Registry database file
    #[arg(long, default_value = ".messenger/registry.db")]
    pub db: PathBuf,

    /// Block until the write-back has been applied
    #[arg(long)]
    pub wait: bool,
}

/// Execute greet command
pub fn execute(args: GreetArgs) -> Result<(), Box<dyn std::error::Error>> {
    // Open the store, creating the database directory on first use
    if let Some(parent) = args.db.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let store = Arc::new(GreetingStore::open(&args.db)?);
    let service = GreetingService::new(store);

    // Fresh operational partition for this process; the queue is FIFO, so
    // the request's write-back always lands after the wipe.
    service.initialize();

    let response = service.handle_request(&args.name);
    println!("{}", response.greeting);

    if args.wait {
        response.write_back.wait()?;
    }

    Ok(())
}
