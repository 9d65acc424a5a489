//! Messenger CLI
//!
//! Command-line interface for the greeting registry and the tabular file
//! converter

use clap::{Parser, Subcommand};
use messenger_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "messenger")]
#[command(about = "Messenger - greeting registry and tabular file converter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Serve a greeting for a name
    Greet(commands::greet::GreetArgs),
    /// Convert a delimited file to JSON and XML
    Convert(commands::convert::ConvertArgs),
    /// Inspect the registry database
    Registry(commands::registry::RegistryArgs),
    /// Seed import operations
    Seed(commands::seed::SeedArgs),
}

fn main() {
    init(Profile::Development);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Greet(args) => commands::greet::execute(args),
        Commands::Convert(args) => commands::convert::execute(args),
        Commands::Registry(args) => commands::registry::execute(args),
        Commands::Seed(args) => commands::seed::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
