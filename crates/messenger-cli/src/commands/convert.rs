//! Convert command
//!
//! Usage: messenger convert <INPUT> [--output-dir <DIR>] [--collection <KEY>]

use clap::Args;
use messenger_core::render::DocumentNames;
use messenger_engine::{convert_tabular_file, ConvertOptions};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Delimited input file
    pub input: PathBuf,

    /// Directory for the outputs (default: next to the input)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// JSON collection key
    #[arg(long, default_value = "ChemicalElements")]
    pub collection: String,
}

/// Execute convert command
pub fn execute(args: ConvertArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = ConvertOptions::new(args.input);
    options.output_dir = args.output_dir;
    options.names = DocumentNames::default().with_collection(args.collection);

    let summary = convert_tabular_file(&options)?;

    println!(
        "✓ Converted {} rows x {} columns",
        summary.rows, summary.columns
    );
    for path in &summary.written {
        println!("  wrote {}", path.display());
    }

    Ok(())
}
