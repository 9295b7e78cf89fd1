// ============================================================
// DATASET DOMAIN MODULE
// ============================================================
// In-memory table model and derived analysis views
// Pure data types only; parsing and statistics live in infrastructure

pub mod analysis_config;
pub mod column_type;
pub mod report;
pub mod table;

pub use analysis_config::AnalysisConfig;
pub use column_type::ColumnType;
pub use report::{
    format_file_size, BasicStats, CategoryBreakdown, CategoryShare, ColumnDistribution,
    ColumnProfile, CorrelationAnalysis, CorrelationMatrix, DatasetReport, FraudBreakdown,
    NumericSummary, QualityMetrics, TransactionSummary,
};
pub use table::ParsedTable;
