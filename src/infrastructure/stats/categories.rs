// ============================================================
// CATEGORICAL AGGREGATION
// ============================================================
// Top-N category totals, fraud breakdown, transaction summary

use std::collections::HashMap;

use crate::domain::dataset::{
    AnalysisConfig, CategoryBreakdown, CategoryShare, FraudBreakdown, ParsedTable,
    TransactionSummary,
};
use crate::infrastructure::csv::parse_numeric;

/// Header fragments that mark the columns the dashboard cares about
const CATEGORY_HINTS: [&str; 4] = ["category", "type", "merchant", "description"];
const CATEGORY_AMOUNT_HINTS: [&str; 2] = ["amount", "value"];
const SUMMARY_AMOUNT_HINTS: [&str; 4] = ["amount", "value", "price", "cost"];
const FRAUD_HINTS: [&str; 3] = ["fraud", "class", "target"];
const FRAUD_TRUTHY: [&str; 4] = ["1", "true", "fraud", "yes"];

/// Top-N aggregation over the first category-like column.
///
/// Groups are summed over the amount column when one exists, otherwise
/// each row counts as 1. Empty category values fall into a literal
/// "Unknown" bucket. The sort is stable, so equal totals keep their
/// first-encounter order, and percentages are taken over the displayed
/// top-N subset rather than the grand total.
pub fn top_categories(table: &ParsedTable, config: &AnalysisConfig) -> Option<CategoryBreakdown> {
    let column = table.find_column(&CATEGORY_HINTS)?.to_string();
    let amount_column = table
        .find_column(&CATEGORY_AMOUNT_HINTS)
        .map(str::to_string);

    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, f64> = HashMap::new();
    for row in &table.rows {
        let raw = row.get(&column).map(String::as_str).unwrap_or("");
        let name = if raw.trim().is_empty() {
            "Unknown".to_string()
        } else {
            raw.to_string()
        };
        let weight = match &amount_column {
            Some(amount) => row
                .get(amount)
                .and_then(|value| parse_numeric(value))
                .unwrap_or(0.0),
            None => 1.0,
        };
        if !totals.contains_key(&name) {
            order.push(name.clone());
        }
        *totals.entry(name).or_insert(0.0) += weight;
    }

    let mut groups: Vec<(String, f64)> = order
        .into_iter()
        .map(|name| {
            let total = totals[&name];
            (name, total)
        })
        .collect();
    groups.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    groups.truncate(config.top_categories);

    let shown_total: f64 = groups.iter().map(|(_, total)| total).sum();
    let groups = groups
        .into_iter()
        .map(|(name, total)| CategoryShare {
            name,
            total,
            percentage: if shown_total > 0.0 {
                total / shown_total * 100.0
            } else {
                0.0
            },
        })
        .collect();

    Some(CategoryBreakdown {
        column,
        amount_column,
        groups,
    })
}

/// Fraud-vs-legitimate split over the first label-like column.
/// A value counts as fraud when it equals 1/true/fraud/yes after
/// trimming and lowercasing.
pub fn fraud_breakdown(table: &ParsedTable) -> Option<FraudBreakdown> {
    let column = table.find_column(&FRAUD_HINTS)?.to_string();
    let values = table.non_empty_values(&column);
    let total = values.len();

    let fraud_count = values
        .iter()
        .filter(|value| {
            let lower = value.trim().to_lowercase();
            FRAUD_TRUTHY.iter().any(|truthy| *truthy == lower)
        })
        .count();
    let legit_count = total - fraud_count;

    let (fraud_percentage, legit_percentage) = if total > 0 {
        (
            fraud_count as f64 / total as f64 * 100.0,
            legit_count as f64 / total as f64 * 100.0,
        )
    } else {
        (0.0, 0.0)
    };

    Some(FraudBreakdown {
        column,
        fraud_count,
        legit_count,
        fraud_percentage,
        legit_percentage,
    })
}

/// Record count plus total and average over the first amount-like column
pub fn transaction_summary(table: &ParsedTable) -> TransactionSummary {
    let amount_column = table.find_column(&SUMMARY_AMOUNT_HINTS).map(str::to_string);

    let mut total_amount = 0.0;
    let mut average_amount = 0.0;
    if let Some(column) = &amount_column {
        let amounts: Vec<f64> = table
            .column_values(column)
            .iter()
            .filter_map(|value| parse_numeric(value))
            .collect();
        if !amounts.is_empty() {
            total_amount = amounts.iter().sum();
            average_amount = total_amount / amounts.len() as f64;
        }
    }

    TransactionSummary {
        total_transactions: table.row_count(),
        amount_column,
        total_amount,
        average_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::csv::TableParser;

    const CATEGORY_CSV: &str = "\
merchant_category,amount
groceries,100
travel,300
groceries,50
,25
dining,200
fuel,60
pharmacy,40
books,10
electronics,500
";

    #[test]
    fn test_top_categories_sums_and_truncates() {
        let table = TableParser::new().parse(CATEGORY_CSV).unwrap();
        let breakdown = top_categories(&table, &AnalysisConfig::default()).unwrap();
        assert_eq!(breakdown.column, "merchant_category");
        assert_eq!(breakdown.amount_column.as_deref(), Some("amount"));
        assert_eq!(breakdown.groups.len(), 6);
        assert_eq!(breakdown.groups[0].name, "electronics");
        assert_eq!(breakdown.groups[0].total, 500.0);
        // groceries rows are summed
        assert!(breakdown.groups.iter().any(|g| g.name == "groceries" && g.total == 150.0));
        // the empty category lands in the Unknown bucket but 25 does not
        // make the top 6 here
        assert!(!breakdown.groups.iter().any(|g| g.name == "Unknown"));
    }

    #[test]
    fn test_percentages_cover_displayed_subset() {
        let table = TableParser::new().parse(CATEGORY_CSV).unwrap();
        let breakdown = top_categories(&table, &AnalysisConfig::default()).unwrap();
        let sum: f64 = breakdown.groups.iter().map(|g| g.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_ranking_with_tied_sums() {
        let csv = "type,amount\nA,10\nB,30\nC,5\nD,30\n";
        let table = TableParser::new().parse(csv).unwrap();
        let breakdown = top_categories(&table, &AnalysisConfig::default()).unwrap();
        let names: Vec<&str> = breakdown.groups.iter().map(|g| g.name.as_str()).collect();
        // B and D tie at 30; B was encountered first
        assert_eq!(names, vec!["B", "D", "A", "C"]);
        let sum: f64 = breakdown.groups.iter().map(|g| g.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_ties_keep_first_encounter_order() {
        let csv = "type,amount\nbeta,10\nalpha,10\n";
        let table = TableParser::new().parse(csv).unwrap();
        let breakdown = top_categories(&table, &AnalysisConfig::default()).unwrap();
        assert_eq!(breakdown.groups[0].name, "beta");
        assert_eq!(breakdown.groups[1].name, "alpha");
    }

    #[test]
    fn test_missing_amount_column_counts_rows() {
        let csv = "category\na\na\nb\n";
        let table = TableParser::new().parse(csv).unwrap();
        let breakdown = top_categories(&table, &AnalysisConfig::default()).unwrap();
        assert!(breakdown.amount_column.is_none());
        assert_eq!(breakdown.groups[0].name, "a");
        assert_eq!(breakdown.groups[0].total, 2.0);
    }

    #[test]
    fn test_empty_values_bucket_as_unknown() {
        let csv = "category\nx\n\" \"\n";
        let table = TableParser::new().parse(csv).unwrap();
        let breakdown = top_categories(&table, &AnalysisConfig::default()).unwrap();
        assert!(breakdown.groups.iter().any(|g| g.name == "Unknown"));
    }

    #[test]
    fn test_no_category_column_is_none() {
        let csv = "a,b\n1,2\n";
        let table = TableParser::new().parse(csv).unwrap();
        assert!(top_categories(&table, &AnalysisConfig::default()).is_none());
    }

    #[test]
    fn test_fraud_breakdown_truthy_values() {
        let csv = "is_fraud\n1\n0\nTrue\nno\nFRAUD\n0\n";
        let table = TableParser::new().parse(csv).unwrap();
        let breakdown = fraud_breakdown(&table).unwrap();
        assert_eq!(breakdown.fraud_count, 3);
        assert_eq!(breakdown.legit_count, 3);
        assert!((breakdown.fraud_percentage - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_transaction_summary_totals() {
        let csv = "transaction_amount\n10\nbad\n30\n";
        let table = TableParser::new().parse(csv).unwrap();
        let summary = transaction_summary(&table);
        assert_eq!(summary.total_transactions, 3);
        assert_eq!(summary.total_amount, 40.0);
        assert_eq!(summary.average_amount, 20.0);
    }

    #[test]
    fn test_transaction_summary_without_amount_column() {
        let csv = "channel\nweb\npos\n";
        let table = TableParser::new().parse(csv).unwrap();
        let summary = transaction_summary(&table);
        assert!(summary.amount_column.is_none());
        assert_eq!(summary.total_amount, 0.0);
        assert_eq!(summary.average_amount, 0.0);
    }
}
