//! Seed import command
//!
//! Usage: messenger seed import <PATH> [--db <FILE>]

use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SeedArgs {
    #[command(subcommand)]
    pub command: SeedCommand,
}

#[derive(Debug, Subcommand)]
pub enum SeedCommand {
    /// Import a seed file into the configuration partition
    Import(ImportArgs),
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Path to a seed YAML file or a directory of them
    pub path: PathBuf,

    /// Registry database file
    #[arg(long, default_value = ".messenger/registry.db")]
    pub db: PathBuf,
}

/// Execute seed command
pub fn execute(args: SeedArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        SeedCommand::Import(import_args) => execute_import(import_args),
    }
}

/// Execute seed import
fn execute_import(args: ImportArgs) -> Result<(), Box<dyn std::error::Error>> {
    // Open database, creating its directory on first use
    if let Some(parent) = args.db.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut conn = rusqlite::Connection::open(&args.db)?;
    messenger_store::db::configure(&conn)?;
    messenger_store::migrations::apply_migrations(&mut conn)?;

    if args.path.is_dir() {
        // Import a directory of seeds (sorted for determinism)
        let mut seed_files: Vec<PathBuf> = std::fs::read_dir(&args.path)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.extension()
                    .map(|ext| ext == "yaml" || ext == "yml")
                    .unwrap_or(false)
            })
            .collect();

        seed_files.sort();

        for seed_file in seed_files {
            println!("Importing {}...", seed_file.display());
            let digest = messenger_store::seed::import_seed(&seed_file, &mut conn)?;
            println!("✓ Imported (digest: {})", digest);
        }
    } else {
        println!("Importing {}...", args.path.display());
        let digest = messenger_store::seed::import_seed(&args.path, &mut conn)?;
        println!("✓ Imported (digest: {})", digest);
    }

    Ok(())
}
