// ============================================================
// ANALYSIS CONFIGURATION
// ============================================================
// Tuning values for type inference and derived statistics

use serde::{Deserialize, Serialize};

/// Configuration for dataset analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Number of leading non-empty values sampled per column for type
    /// inference (default: 100)
    pub type_sample_size: usize,

    /// Fraction of sampled values that must parse as numbers to classify
    /// a column as Numeric (default: 0.8, strict greater-than)
    pub numeric_threshold: f64,

    /// Fraction of sampled values that must parse as dates to classify
    /// a column as Date (default: 0.8, strict greater-than)
    pub date_threshold: f64,

    /// Number of category groups returned by the top-N aggregation
    /// (default: 6)
    pub top_categories: usize,

    /// Maximum number of numeric columns given a per-column distribution
    /// summary (default: 4)
    pub max_distribution_columns: usize,

    /// Number of equal-width bins in the amount histogram (default: 20)
    pub histogram_bins: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            type_sample_size: 100,
            numeric_threshold: 0.8,
            date_threshold: 0.8,
            top_categories: 6,
            max_distribution_columns: 4,
            histogram_bins: 20,
        }
    }
}

impl AnalysisConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.type_sample_size == 0 {
            return Err("type_sample_size must be > 0".to_string());
        }
        if !(0.0..1.0).contains(&self.numeric_threshold) {
            return Err("numeric_threshold must be in [0.0, 1.0)".to_string());
        }
        if !(0.0..1.0).contains(&self.date_threshold) {
            return Err("date_threshold must be in [0.0, 1.0)".to_string());
        }
        if self.top_categories == 0 {
            return Err("top_categories must be > 0".to_string());
        }
        if self.histogram_bins == 0 {
            return Err("histogram_bins must be > 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AnalysisConfig::default().validate().is_ok());
    }

    #[test]
    fn test_out_of_range_threshold_is_rejected() {
        let config = AnalysisConfig {
            numeric_threshold: 1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
