//! Tabular file conversion pipeline
//!
//! ## Pipeline (in order):
//! 1. Read the input file; a missing file is an error, any other read
//!    failure degrades to an empty document
//! 2. Parse into a tabular document
//! 3. Render JSON and XML
//! 4. Write both outputs under fixed names; a failed write is logged and
//!    dropped from the summary, the other output is still attempted

#![allow(clippy::result_large_err)]

use messenger_core::errors::{MsgError, MsgErrorKind};
use messenger_core::render::{render_json, render_xml, DocumentNames};
use messenger_core::tabular::{TabularDocument, DEFAULT_DELIMITER};
use messenger_core::{log_op_end, log_op_error, log_op_start};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Fixed name of the JSON rendering
pub const JSON_OUTPUT_FILE: &str = "Periodic_JSON.txt";

/// Fixed name of the XML rendering
pub const XML_OUTPUT_FILE: &str = "Periodic_XML.xml";

/// Options for one conversion run
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Delimited input file
    pub input: PathBuf,

    /// Where outputs go; defaults to the input file's directory
    pub output_dir: Option<PathBuf>,

    /// Field delimiter
    pub delimiter: char,

    /// Collection key and element names used by the renderers
    pub names: DocumentNames,
}

impl ConvertOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: None,
            delimiter: DEFAULT_DELIMITER,
            names: DocumentNames::default(),
        }
    }
}

/// Summary of a conversion run
#[derive(Debug, Clone)]
pub struct ConvertSummary {
    /// Data rows parsed (the header line is not a row)
    pub rows: usize,

    /// Header width
    pub columns: usize,

    /// Output files that were actually written
    pub written: Vec<PathBuf>,
}

/// Convert a delimited text file into its JSON and XML renderings
pub fn convert_tabular_file(options: &ConvertOptions) -> Result<ConvertSummary, MsgError> {
    let started = Instant::now();
    log_op_start!("convert_tabular", path = %options.input.display());

    match run_conversion(options) {
        Ok(summary) => {
            log_op_end!(
                "convert_tabular",
                duration_ms = started.elapsed().as_millis() as u64,
                rows = summary.rows,
                columns = summary.columns
            );
            Ok(summary)
        }
        Err(e) => {
            log_op_error!(
                "convert_tabular",
                e.clone(),
                duration_ms = started.elapsed().as_millis() as u64
            );
            Err(e)
        }
    }
}

fn run_conversion(options: &ConvertOptions) -> Result<ConvertSummary, MsgError> {
    let content = read_input(&options.input)?;
    let document = TabularDocument::parse(&content, options.delimiter);

    let output_dir = match &options.output_dir {
        Some(dir) => dir.clone(),
        None => options
            .input
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };

    let json = render_json(&document, &options.names)?;
    let xml = render_xml(&document, &options.names);

    let mut written = Vec::new();
    for (file_name, payload) in [(JSON_OUTPUT_FILE, json), (XML_OUTPUT_FILE, xml)] {
        let path = output_dir.join(file_name);
        if write_output(&path, &payload) {
            written.push(path);
        }
    }

    Ok(ConvertSummary {
        rows: document.row_count(),
        columns: document.column_count(),
        written,
    })
}

/// Read the input, distinguishing a missing file from other failures
fn read_input(input: &Path) -> Result<String, MsgError> {
    match fs::read_to_string(input) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(MsgError::new(MsgErrorKind::NotFound)
            .with_op("convert_read")
            .with_path(input.display().to_string())
            .with_message("Input file not found")),
        Err(e) => {
            tracing::warn!(
                component = module_path!(),
                op = "convert_read",
                path = %input.display(),
                error = %e,
                "Reading input failed; converting an empty document"
            );
            Ok(String::new())
        }
    }
}

/// Write one output file, reporting whether it landed
fn write_output(path: &Path, payload: &str) -> bool {
    match fs::write(path, payload) {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(
                component = module_path!(),
                op = "convert_write",
                path = %path.display(),
                error = %e,
                "Writing output failed; omitting it from the summary"
            );
            false
        }
    }
}
