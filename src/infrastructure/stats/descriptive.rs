// ============================================================
// DESCRIPTIVE STATISTICS
// ============================================================
// Min / max / mean / median over the parseable numeric subset

use crate::domain::dataset::NumericSummary;
use crate::infrastructure::csv::parse_numeric;

/// Summarize one column's values. Only the values that parse as numbers
/// participate; when none do the summary is `None`, never NaN.
pub fn numeric_summary(values: &[&str]) -> Option<NumericSummary> {
    let mut numbers: Vec<f64> = values.iter().filter_map(|value| parse_numeric(value)).collect();
    if numbers.is_empty() {
        return None;
    }

    numbers.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let count = numbers.len();
    let mean = numbers.iter().sum::<f64>() / count as f64;

    Some(NumericSummary {
        count,
        min: numbers[0],
        max: numbers[count - 1],
        mean,
        median: median_of_sorted(&numbers),
    })
}

/// Even-length inputs average the two middle values
fn median_of_sorted(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_even_count() {
        let summary = numeric_summary(&["1", "2", "3", "4"]).unwrap();
        assert_eq!(summary.median, 2.5);
    }

    #[test]
    fn test_median_odd_count() {
        let summary = numeric_summary(&["3", "1", "2"]).unwrap();
        assert_eq!(summary.median, 2.0);
    }

    #[test]
    fn test_summary_over_parseable_subset_only() {
        let summary = numeric_summary(&["10", "n/a", "30", "", "20"]).unwrap();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.min, 10.0);
        assert_eq!(summary.max, 30.0);
        assert_eq!(summary.mean, 20.0);
        assert_eq!(summary.range(), 20.0);
    }

    #[test]
    fn test_no_parseable_values_is_none() {
        assert!(numeric_summary(&["a", "b", ""]).is_none());
        assert!(numeric_summary(&[]).is_none());
    }
}
