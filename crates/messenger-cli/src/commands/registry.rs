//! Registry inspection command
//!
//! Usage: messenger registry list [--partition <P>] [--db <FILE>]
//!        messenger registry get <NAME> [--partition <P>] [--db <FILE>]

use clap::{Args, Subcommand};
use messenger_core::model::Partition;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Args)]
pub struct RegistryArgs {
    #[command(subcommand)]
    pub command: RegistryCommand,
}

#[derive(Debug, Subcommand)]
pub enum RegistryCommand {
    /// List the entries in a partition
    List(ListArgs),
    /// Show one entry's greeting
    Get(GetArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Partition to list (configuration or operational)
    #[arg(long, default_value = "configuration")]
    pub partition: String,

    /// Registry database file
    #[arg(long, default_value = ".messenger/registry.db")]
    pub db: PathBuf,
}

#[derive(Debug, Args)]
pub struct GetArgs {
    /// Entry name
    pub name: String,

    /// Partition to look in (configuration or operational)
    #[arg(long, default_value = "configuration")]
    pub partition: String,

    /// Registry database file
    #[arg(long, default_value = ".messenger/registry.db")]
    pub db: PathBuf,
}

/// Execute registry command
pub fn execute(args: RegistryArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        RegistryCommand::List(list_args) => execute_list(list_args),
        RegistryCommand::Get(get_args) => execute_get(get_args),
    }
}

/// Execute registry list
fn execute_list(args: ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let partition = Partition::from_str(&args.partition)?;

    // Open database read-only; no committer is needed for inspection
    let conn = rusqlite::Connection::open(&args.db)?;
    let registry = messenger_store::repo::hydration::load_registry(&conn, partition)?;

    if registry.is_empty() {
        println!("(no entries in {})", partition);
        return Ok(());
    }
    for entry in registry.iter() {
        println!("{}\t{}", entry.name, entry.greeting);
    }

    Ok(())
}

/// Execute registry get
fn execute_get(args: GetArgs) -> Result<(), Box<dyn std::error::Error>> {
    let partition = Partition::from_str(&args.partition)?;

    let conn = rusqlite::Connection::open(&args.db)?;
    let registry = messenger_store::repo::hydration::load_registry(&conn, partition)?;

    let entry = registry.require(&args.name)?;
    println!("{}", entry.greeting);

    Ok(())
}
