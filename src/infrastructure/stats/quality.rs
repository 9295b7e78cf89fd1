// ============================================================
// DATA QUALITY METRICS
// ============================================================
// Completeness, row consistency, and row uniqueness

use std::collections::HashSet;

use crate::domain::dataset::{ParsedTable, QualityMetrics};

/// Table-wide quality metrics. An empty table reports `None`; the
/// divisions below are never evaluated with a zero denominator.
pub fn quality_metrics(table: &ParsedTable) -> Option<QualityMetrics> {
    let row_count = table.row_count();
    let column_count = table.column_count();
    if row_count == 0 || column_count == 0 {
        return None;
    }

    let total_cells = row_count * column_count;
    let mut empty_cells = 0;
    let mut consistent_rows = 0;
    let mut distinct_rows = HashSet::new();

    for row in &table.rows {
        // Header order makes the row key deterministic
        let key: Vec<&str> = table
            .headers
            .iter()
            .map(|header| row.get(header).map(String::as_str).unwrap_or(""))
            .collect();
        let row_empty = key.iter().filter(|value| value.trim().is_empty()).count();
        if row_empty == 0 {
            consistent_rows += 1;
        }
        empty_cells += row_empty;
        distinct_rows.insert(key);
    }

    let completeness = (total_cells - empty_cells) as f64 / total_cells as f64 * 100.0;
    let consistency = (consistent_rows as f64 / row_count as f64 * 100.0).round() as u32;
    let uniqueness = (distinct_rows.len() as f64 / row_count as f64 * 100.0).round() as u32;

    Some(QualityMetrics {
        completeness,
        consistency,
        uniqueness,
        empty_cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::csv::TableParser;

    #[test]
    fn test_completeness_keeps_two_decimals() {
        // 5 rows x 2 columns = 10 cells, 3 empty
        let csv = "a,b\n1,2\n3,\n,\n5,6\n7,8\n";
        let table = TableParser::new().parse(csv).unwrap();
        let quality = quality_metrics(&table).unwrap();
        assert_eq!(quality.empty_cells, 3);
        assert_eq!(quality.completeness_display(), "70.00");
    }

    #[test]
    fn test_consistency_counts_fully_populated_rows() {
        let csv = "a,b\n1,2\n3,\n5,6\n";
        let table = TableParser::new().parse(csv).unwrap();
        let quality = quality_metrics(&table).unwrap();
        // 2 of 3 rows are fully populated, 66.7 rounds to 67
        assert_eq!(quality.consistency, 67);
    }

    #[test]
    fn test_uniqueness_uses_full_row_equality() {
        let csv = "a\n1\n1\n2\n";
        let table = TableParser::new().parse(csv).unwrap();
        let quality = quality_metrics(&table).unwrap();
        // 2 distinct rows of 3, 66.7 rounds to 67
        assert_eq!(quality.uniqueness, 67);
    }

    #[test]
    fn test_empty_table_reports_none() {
        let table = TableParser::new().parse("a,b\n").unwrap();
        assert!(quality_metrics(&table).is_none());
    }
}
