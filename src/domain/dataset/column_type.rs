// ============================================================
// COLUMN TYPE ENUM
// ============================================================
// Classification assigned to each column of an ingested dataset

use serde::{Deserialize, Serialize};

/// Inferred content type of a dataset column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    /// More than 80% of sampled values parse as numbers
    Numeric,

    /// More than 80% of sampled values parse as calendar dates
    /// (only checked after the numeric test fails)
    Date,

    /// Anything that is neither predominantly numeric nor date-like
    Text,

    /// Column has no non-empty values to sample
    Unknown,
}

impl ColumnType {
    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ColumnType::Numeric => "Predominantly numeric values, summarized with min/max/mean/median",
            ColumnType::Date => "Predominantly calendar dates",
            ColumnType::Text => "Free-form or categorical text",
            ColumnType::Unknown => "No non-empty values available",
        }
    }

    /// True when the column participates in numeric summaries and correlation
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Numeric)
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::Numeric => write!(f, "Numeric"),
            ColumnType::Date => write!(f, "Date"),
            ColumnType::Text => write!(f, "Text"),
            ColumnType::Unknown => write!(f, "Unknown"),
        }
    }
}
