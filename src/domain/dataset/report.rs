// ============================================================
// DATASET REPORT
// ============================================================
// Derived views produced by one analysis run over a parsed table

use serde::{Deserialize, Serialize};

use super::column_type::ColumnType;

/// Row/column counts and raw input size
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicStats {
    pub row_count: usize,
    pub column_count: usize,
    pub raw_bytes: usize,
}

impl BasicStats {
    /// Human-readable size of the uploaded text ("1.5 KB", "2 MB", ...)
    pub fn file_size_display(&self) -> String {
        format_file_size(self.raw_bytes)
    }
}

/// Per-column profile: inferred type plus population counts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub name: String,
    pub inferred_type: ColumnType,
    pub non_empty_count: usize,
    pub distinct_count: usize,
    pub missing_count: usize,
}

impl ColumnProfile {
    pub fn missing_percentage(&self, row_count: usize) -> f64 {
        if row_count == 0 {
            return 0.0;
        }
        self.missing_count as f64 / row_count as f64 * 100.0
    }
}

/// Table-wide data quality metrics.
///
/// Completeness keeps two decimals; consistency and uniqueness are
/// rounded to whole percentages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub completeness: f64,
    pub consistency: u32,
    pub uniqueness: u32,
    pub empty_cells: usize,
}

impl QualityMetrics {
    pub fn completeness_display(&self) -> String {
        format!("{:.2}", self.completeness)
    }
}

/// Five-number style summary of one numeric column, computed over the
/// values that actually parsed as numbers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}

impl NumericSummary {
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Distribution entry for one numeric column; `None` when no value of
/// the column parsed as a number
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDistribution {
    pub column: String,
    pub summary: Option<NumericSummary>,
}

/// Pearson correlation matrix over the Numeric columns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.values.get(i).and_then(|row| row.get(j)).copied()
    }
}

/// Correlation step outcome. With fewer than two Numeric columns the
/// step is skipped entirely instead of producing a degenerate matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CorrelationAnalysis {
    Matrix(CorrelationMatrix),
    InsufficientNumericColumns { numeric_columns: usize },
}

/// One group of the top-N categorical aggregation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryShare {
    pub name: String,
    pub total: f64,

    /// Share of this group within the displayed top-N subset, not the
    /// grand total
    pub percentage: f64,
}

/// Top-N aggregation over the detected categorical column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub column: String,
    pub amount_column: Option<String>,
    pub groups: Vec<CategoryShare>,
}

/// Fraud-vs-legitimate split over the detected label column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FraudBreakdown {
    pub column: String,
    pub fraud_count: usize,
    pub legit_count: usize,
    pub fraud_percentage: f64,
    pub legit_percentage: f64,
}

/// Record count and amount totals over the detected amount column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionSummary {
    pub total_transactions: usize,
    pub amount_column: Option<String>,
    pub total_amount: f64,
    pub average_amount: f64,
}

/// Everything one analysis run produces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetReport {
    pub basic: BasicStats,
    pub quality: Option<QualityMetrics>,
    pub columns: Vec<ColumnProfile>,
    pub distributions: Vec<ColumnDistribution>,
    pub correlation: CorrelationAnalysis,
    pub categories: Option<CategoryBreakdown>,
    pub fraud: Option<FraudBreakdown>,
    pub transactions: TransactionSummary,
}

impl DatasetReport {
    pub fn numeric_column_names(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|column| column.inferred_type.is_numeric())
            .map(|column| column.name.as_str())
            .collect()
    }
}

/// Format a byte count the way the dashboard displays upload sizes.
/// Trailing zeros after the decimal point are dropped ("1.5 KB", "2 MB").
pub fn format_file_size(bytes: usize) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);
    let mut rendered = format!("{:.2}", value);
    while rendered.ends_with('0') {
        rendered.pop();
    }
    if rendered.ends_with('.') {
        rendered.pop();
    }
    format!("{} {}", rendered, UNITS[exponent])
}
