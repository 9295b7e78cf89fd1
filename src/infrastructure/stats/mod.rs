// ============================================================
// STATISTICS INFRASTRUCTURE
// ============================================================
// Descriptive statistics, quality metrics, correlation, aggregation

pub mod categories;
pub mod correlation;
pub mod descriptive;
pub mod histogram;
pub mod quality;

pub use categories::{fraud_breakdown, top_categories, transaction_summary};
pub use correlation::{correlation, correlation_matrix};
pub use descriptive::numeric_summary;
pub use histogram::build_amount_histogram;
pub use quality::quality_metrics;
