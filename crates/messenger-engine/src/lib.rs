//! Messenger Engine - Orchestration layer
//!
//! Coordinates the greeting request path and the file conversion pipeline
//! over the core domain logic and the persistence layer.

pub mod commands;

pub use commands::convert::{convert_tabular_file, ConvertOptions, ConvertSummary};
pub use commands::greet::{GreetingResponse, GreetingService};
