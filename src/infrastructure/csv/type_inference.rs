// ============================================================
// COLUMN TYPE INFERENCE
// ============================================================
// Heuristic classification of column content from a value sample

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::dataset::{AnalysisConfig, ColumnType};

static THOUSANDS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d{1,3}(,\d{3})+(\.\d+)?$").unwrap());

// Shape prefilter: either a bare 4-digit year or digit groups joined by
// -, / or . separators, optionally followed by a time part. Anything
// passing the prefilter still has to survive a real chrono parse.
static DATE_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4}|\d{1,4}[-/.]\d{1,2}([-/.]\d{1,4})?([ T].+)?)$").unwrap());

/// Classify a column from its non-empty values.
///
/// Only the first `type_sample_size` values are sampled. The numeric
/// test runs first and wins outright: a column of bare years parses as
/// both numbers and dates, and must classify Numeric.
pub fn infer_column_type(values: &[&str], config: &AnalysisConfig) -> ColumnType {
    if values.is_empty() {
        return ColumnType::Unknown;
    }

    let sample: Vec<&str> = values.iter().copied().take(config.type_sample_size).collect();
    let sample_len = sample.len() as f64;
    let numeric_count = sample
        .iter()
        .filter(|value| parse_numeric(value).is_some())
        .count();
    let date_count = sample.iter().filter(|value| is_date_value(value)).count();

    if numeric_count as f64 / sample_len > config.numeric_threshold {
        ColumnType::Numeric
    } else if date_count as f64 / sample_len > config.date_threshold {
        ColumnType::Date
    } else {
        ColumnType::Text
    }
}

/// Permissive numeric parse: plain integer/float literals plus values
/// with thousands separators ("1,234.56")
pub fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = trimmed.parse::<f64>() {
        return Some(parsed);
    }
    if THOUSANDS_RE.is_match(trimmed) {
        return trimmed.replace(',', "").parse::<f64>().ok();
    }
    None
}

/// Permissive calendar-date check covering the formats simple CSV
/// exports actually use, including bare 4-digit years
pub fn is_date_value(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() || !DATE_SHAPE_RE.is_match(trimmed) {
        return false;
    }

    if trimmed.len() == 4 && trimmed.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }
    if chrono::DateTime::parse_from_rfc3339(trimmed).is_ok() {
        return true;
    }

    const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y", "%Y.%m.%d"];
    const DATETIME_FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%m/%d/%Y %H:%M",
    ];
    DATE_FORMATS
        .iter()
        .any(|format| NaiveDate::parse_from_str(trimmed, format).is_ok())
        || DATETIME_FORMATS
            .iter()
            .any(|format| NaiveDateTime::parse_from_str(trimmed, format).is_ok())
}
