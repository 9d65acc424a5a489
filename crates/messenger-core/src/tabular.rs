//! Tabular document parsing
//!
//! Parses delimiter-separated text into a header plus rows. The tokenizer
//! yields only non-empty segments, so consecutive, leading, or trailing
//! delimiters never produce empty tokens. Rows are normalized to the header
//! width at parse time: missing trailing fields read as empty strings and
//! fields beyond the header width are dropped.

/// Delimiter used when the caller does not specify one
pub const DEFAULT_DELIMITER: char = ',';

/// Split a line on the delimiter, keeping only non-empty segments
///
/// # Example
///
/// ```
/// use messenger_core::tabular::tokenize;
///
/// assert_eq!(tokenize("a,,b,", ','), vec!["a", "b"]);
/// ```
pub fn tokenize(line: &str, delimiter: char) -> Vec<&str> {
    line.split(delimiter).filter(|s| !s.is_empty()).collect()
}

/// A parsed tabular document: one header row plus zero or more data rows
///
/// Every row holds exactly `header.len()` fields.
#[derive(Debug, Clone, PartialEq)]
pub struct TabularDocument {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TabularDocument {
    /// Parse delimiter-separated text
    ///
    /// The first line is the header; every following line is a data row.
    /// Empty input yields an empty document. A blank line mid-file becomes a
    /// row whose every field is empty.
    pub fn parse(input: &str, delimiter: char) -> Self {
        let mut lines = input.lines();

        let header: Vec<String> = match lines.next() {
            Some(line) => tokenize(line, delimiter)
                .into_iter()
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        };

        let width = header.len();
        let rows = lines
            .map(|line| {
                let mut fields: Vec<String> = tokenize(line, delimiter)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                fields.truncate(width);
                fields.resize(width, String::new());
                fields
            })
            .collect();

        Self { header, rows }
    }

    /// Column names from the first input line
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Data rows, each normalized to the header width
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (the header width)
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Check whether the document has neither header nor rows
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.rows.is_empty()
    }
}
