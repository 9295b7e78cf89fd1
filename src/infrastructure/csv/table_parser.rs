// ============================================================
// TABLE PARSER
// ============================================================
// Lenient delimited-text parsing for uploaded datasets

use std::collections::HashMap;

use tracing::debug;

use crate::domain::dataset::ParsedTable;
use crate::domain::error::{AppError, Result};

/// Lenient CSV parser for simple exports.
///
/// This is deliberately not an RFC 4180 parser: fields are split on the
/// raw delimiter and literal double quotes are stripped, so a comma
/// embedded in a quoted field splits that field in two. Blank lines are
/// dropped anywhere in the input. Downstream statistics are specified
/// against exactly this behavior; swapping in a strict parser changes
/// analysis results on quoted data.
pub struct TableParser {
    delimiter: char,
}

impl Default for TableParser {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl TableParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parse raw text into a table. The first retained line is the
    /// header row; short data rows are padded with empty strings and
    /// extra trailing fields are dropped.
    pub fn parse(&self, text: &str) -> Result<ParsedTable> {
        let mut lines = text.lines().filter(|line| !line.trim().is_empty());

        let header_line = lines
            .next()
            .ok_or_else(|| AppError::ParseError("dataset contains no rows".to_string()))?;
        let headers: Vec<String> = header_line
            .split(self.delimiter)
            .map(clean_field)
            .collect();

        let mut rows = Vec::new();
        for line in lines {
            let fields: Vec<String> = line.split(self.delimiter).map(clean_field).collect();
            let mut row = HashMap::with_capacity(headers.len());
            for (index, header) in headers.iter().enumerate() {
                let value = fields.get(index).cloned().unwrap_or_default();
                row.insert(header.clone(), value);
            }
            rows.push(row);
        }

        debug!(rows = rows.len(), columns = headers.len(), "dataset parsed");
        Ok(ParsedTable {
            headers,
            rows,
            raw_len: text.len(),
        })
    }
}

/// Strip surrounding whitespace and every literal quote character
fn clean_field(raw: &str) -> String {
    raw.trim().replace('"', "")
}
