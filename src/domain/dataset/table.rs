// ============================================================
// PARSED TABLE
// ============================================================
// The single in-memory representation of an uploaded dataset

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An ingested dataset: ordered headers plus one record per data row.
///
/// Invariant: every row holds exactly one value per header. Short source
/// rows are padded with empty strings at parse time and long rows are
/// truncated, so lookups by header never miss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub rows: Vec<HashMap<String, String>>,

    /// Byte length of the original input, kept for size reporting
    pub raw_len: usize,
}

impl ParsedTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// All values of a column in source order, empty cells included
    pub fn column_values(&self, name: &str) -> Vec<&str> {
        self.rows
            .iter()
            .map(|row| row.get(name).map(String::as_str).unwrap_or(""))
            .collect()
    }

    /// Values of a column that are non-empty after trimming, in source order
    pub fn non_empty_values(&self, name: &str) -> Vec<&str> {
        self.column_values(name)
            .into_iter()
            .filter(|value| !value.trim().is_empty())
            .collect()
    }

    /// First header whose lowercased name contains any of the given fragments.
    /// Used for the category/amount/fraud column heuristics.
    pub fn find_column(&self, fragments: &[&str]) -> Option<&str> {
        self.headers
            .iter()
            .find(|header| {
                let lower = header.to_lowercase();
                fragments.iter().any(|fragment| lower.contains(fragment))
            })
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ParsedTable {
        let headers = vec!["Amount".to_string(), "Channel".to_string()];
        let rows = vec![
            HashMap::from([
                ("Amount".to_string(), "10".to_string()),
                ("Channel".to_string(), "web".to_string()),
            ]),
            HashMap::from([
                ("Amount".to_string(), "".to_string()),
                ("Channel".to_string(), "pos".to_string()),
            ]),
        ];
        ParsedTable {
            headers,
            rows,
            raw_len: 0,
        }
    }

    #[test]
    fn test_column_values_include_empty_cells() {
        let table = table();
        assert_eq!(table.column_values("Amount"), vec!["10", ""]);
        assert_eq!(table.non_empty_values("Amount"), vec!["10"]);
    }

    #[test]
    fn test_find_column_is_case_insensitive() {
        let table = table();
        assert_eq!(table.find_column(&["amount", "value"]), Some("Amount"));
        assert_eq!(table.find_column(&["merchant"]), None);
    }
}
