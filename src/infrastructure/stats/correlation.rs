// ============================================================
// PEARSON CORRELATION
// ============================================================
// Pairwise coefficients and the full matrix over numeric columns

use crate::domain::dataset::{CorrelationMatrix, ParsedTable};
use crate::infrastructure::csv::parse_numeric;

/// Pearson correlation by the running-sums formula.
///
/// Length mismatch, empty input, and a zero (or non-finite) denominator
/// all report 0.0: "no correlation" is the contract for degenerate
/// input, not an error.
pub fn correlation(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.is_empty() {
        return 0.0;
    }

    let n = x.len() as f64;
    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = x.iter().zip(y).map(|(a, b)| a * b).sum();
    let sum_x2: f64 = x.iter().map(|a| a * a).sum();
    let sum_y2: f64 = y.iter().map(|b| b * b).sum();

    let numerator = n * sum_xy - sum_x * sum_y;
    let denominator =
        ((n * sum_x2 - sum_x * sum_x) * (n * sum_y2 - sum_y * sum_y)).sqrt();

    if denominator == 0.0 || !denominator.is_finite() {
        0.0
    } else {
        numerator / denominator
    }
}

/// Full matrix over the given columns with a 1.0 diagonal.
///
/// Each column's numeric subset is taken independently: rows where one
/// column fails to parse still contribute to the other, so a pair may
/// effectively compare different row sets. Callers gate on at least two
/// numeric columns before asking for a matrix.
pub fn correlation_matrix(table: &ParsedTable, columns: &[String]) -> CorrelationMatrix {
    let series: Vec<Vec<f64>> = columns
        .iter()
        .map(|column| {
            table
                .column_values(column)
                .iter()
                .filter_map(|value| parse_numeric(value))
                .collect()
        })
        .collect();

    let n = columns.len();
    let mut values = vec![vec![1.0; n]; n];
    for i in 0..n {
        for j in 0..n {
            if i != j {
                values[i][j] = correlation(&series[i], &series[j]);
            }
        }
    }

    CorrelationMatrix {
        columns: columns.to_vec(),
        values,
    }
}
