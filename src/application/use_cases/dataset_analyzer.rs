// ============================================================
// DATASET ANALYZER USE CASE
// ============================================================
// Orchestrates parsing, profiling, and every derived statistic

use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use crate::domain::dataset::{
    AnalysisConfig, BasicStats, ColumnDistribution, ColumnProfile, CorrelationAnalysis,
    DatasetReport, ParsedTable,
};
use crate::domain::error::{AppError, Result};
use crate::domain::metrics::{AmountHistogram, AmountSample};
use crate::infrastructure::csv::{infer_column_type, load_dataset_text, TableParser};
use crate::infrastructure::stats::{
    build_amount_histogram, correlation_matrix, fraud_breakdown, numeric_summary,
    quality_metrics, top_categories, transaction_summary,
};

/// Runs the whole analysis pipeline over one uploaded dataset.
///
/// Analysis is synchronous and pure: the same input text always yields
/// the same report, and nothing here touches the network.
pub struct DatasetAnalyzer {
    config: AnalysisConfig,
}

impl Default for DatasetAnalyzer {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

impl DatasetAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Load and analyze a dataset file
    pub fn analyze_file(&self, path: &Path) -> Result<DatasetReport> {
        let text = load_dataset_text(path)?;
        self.analyze_text(&text)
    }

    /// Parse and analyze raw dataset text
    pub fn analyze_text(&self, text: &str) -> Result<DatasetReport> {
        self.config
            .validate()
            .map_err(AppError::ValidationError)?;
        let table = TableParser::new().parse(text)?;
        Ok(self.analyze_table(&table))
    }

    /// Bin backend amount/label samples using the configured bin count
    pub fn amount_histogram(&self, samples: &[AmountSample]) -> Option<AmountHistogram> {
        build_amount_histogram(samples, self.config.histogram_bins)
    }

    /// Analyze an already-parsed table
    pub fn analyze_table(&self, table: &ParsedTable) -> DatasetReport {
        let start = Instant::now();

        let columns: Vec<ColumnProfile> = table
            .headers
            .iter()
            .map(|header| {
                let values = table.non_empty_values(header);
                let distinct: HashSet<&str> = values.iter().copied().collect();
                ColumnProfile {
                    name: header.clone(),
                    inferred_type: infer_column_type(&values, &self.config),
                    non_empty_count: values.len(),
                    distinct_count: distinct.len(),
                    missing_count: table.row_count() - values.len(),
                }
            })
            .collect();

        let numeric_columns: Vec<String> = columns
            .iter()
            .filter(|column| column.inferred_type.is_numeric())
            .map(|column| column.name.clone())
            .collect();

        let distributions: Vec<ColumnDistribution> = numeric_columns
            .iter()
            .take(self.config.max_distribution_columns)
            .map(|column| ColumnDistribution {
                column: column.clone(),
                summary: numeric_summary(&table.column_values(column)),
            })
            .collect();

        // Correlation needs at least two numeric columns; below that
        // the step is skipped, not degraded to a 1x1 matrix
        let correlation = if numeric_columns.len() < 2 {
            debug!(
                numeric_columns = numeric_columns.len(),
                "correlation skipped"
            );
            CorrelationAnalysis::InsufficientNumericColumns {
                numeric_columns: numeric_columns.len(),
            }
        } else {
            CorrelationAnalysis::Matrix(correlation_matrix(table, &numeric_columns))
        };

        let report = DatasetReport {
            basic: BasicStats {
                row_count: table.row_count(),
                column_count: table.column_count(),
                raw_bytes: table.raw_len,
            },
            quality: quality_metrics(table),
            columns,
            distributions,
            correlation,
            categories: top_categories(table, &self.config),
            fraud: fraud_breakdown(table),
            transactions: transaction_summary(table),
        };

        info!(
            rows = report.basic.row_count,
            columns = report.basic.column_count,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "dataset analyzed"
        );
        report
    }
}
