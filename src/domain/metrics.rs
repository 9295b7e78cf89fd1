// ============================================================
// MODEL AND ANALYTICS METRICS
// ============================================================
// Read-side payloads from the backend's model-info and analytics routes

use serde::{Deserialize, Serialize};

/// ROC curve sample points from `GET /api/model-info`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RocCurve {
    #[serde(default)]
    pub fpr: Vec<f64>,

    #[serde(default)]
    pub tpr: Vec<f64>,
}

/// Model evaluation metrics.
///
/// Confusion matrix layout is `[[tn, fp], [fn, tp]]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub auc_score: f64,

    #[serde(default)]
    pub specificity: Option<f64>,

    #[serde(default)]
    pub confusion_matrix: Option<Vec<Vec<u64>>>,

    #[serde(default)]
    pub roc_curve: Option<RocCurve>,
}

impl ModelMetrics {
    /// Specificity as reported, or tn / (tn + fp) derived from the
    /// confusion matrix when the backend omits it. Zero denominator
    /// reports 0.0 rather than NaN.
    pub fn effective_specificity(&self) -> Option<f64> {
        if let Some(value) = self.specificity {
            return Some(value);
        }
        let tn = self.confusion_cell(0, 0)? as f64;
        let fp = self.confusion_cell(0, 1)? as f64;
        if tn + fp > 0.0 {
            Some(tn / (tn + fp))
        } else {
            Some(0.0)
        }
    }

    pub fn true_negatives(&self) -> Option<u64> {
        self.confusion_cell(0, 0)
    }

    pub fn false_positives(&self) -> Option<u64> {
        self.confusion_cell(0, 1)
    }

    pub fn false_negatives(&self) -> Option<u64> {
        self.confusion_cell(1, 0)
    }

    pub fn true_positives(&self) -> Option<u64> {
        self.confusion_cell(1, 1)
    }

    fn confusion_cell(&self, i: usize, j: usize) -> Option<u64> {
        self.confusion_matrix
            .as_ref()
            .and_then(|matrix| matrix.get(i))
            .and_then(|row| row.get(j))
            .copied()
    }
}

/// Aggregate counters from `GET /api/fraud-stats`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FraudStats {
    #[serde(default)]
    pub fraud_transactions: u64,

    #[serde(default)]
    pub legit_transactions: u64,
}

impl FraudStats {
    pub fn total(&self) -> u64 {
        self.fraud_transactions + self.legit_transactions
    }
}

/// One day of the fraud-over-time series (`GET /api/analytics/timeseries`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    pub transaction_date: String,

    #[serde(default)]
    pub fraud_count: u64,

    #[serde(default)]
    pub total_count: u64,

    #[serde(default)]
    pub fraud_percentage: f64,
}

impl TrendPoint {
    pub fn legit_count(&self) -> u64 {
        self.total_count.saturating_sub(self.fraud_count)
    }
}

/// Per-channel fraud rate (`GET /api/analytics/channels`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelFraudRate {
    #[serde(default)]
    pub channel: String,

    #[serde(default)]
    pub fraud_percentage: f64,
}

impl ChannelFraudRate {
    /// Channel name capitalized for chart labels ("web" -> "Web")
    pub fn display_label(&self) -> String {
        let mut chars = self.channel.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

/// One scored transaction sample (`GET /api/analytics/amount_vs_fraud`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmountSample {
    #[serde(default)]
    pub transaction_amount: f64,

    #[serde(default)]
    pub is_fraud: i64,
}

/// One equal-width bin of the amount histogram
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmountBin {
    pub lower: f64,
    pub upper: f64,
    pub fraud: usize,
    pub legit: usize,
}

/// Amount histogram with fraud/legit counts per bin, derived from the
/// amount-vs-fraud samples
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmountHistogram {
    pub bins: Vec<AmountBin>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(specificity: Option<f64>, confusion: Option<Vec<Vec<u64>>>) -> ModelMetrics {
        ModelMetrics {
            accuracy: 0.95,
            precision: 0.9,
            recall: 0.8,
            f1_score: 0.85,
            auc_score: 0.97,
            specificity,
            confusion_matrix: confusion,
            roc_curve: None,
        }
    }

    #[test]
    fn test_reported_specificity_wins() {
        let m = metrics(Some(0.5), Some(vec![vec![90, 10], vec![5, 95]]));
        assert_eq!(m.effective_specificity(), Some(0.5));
    }

    #[test]
    fn test_specificity_derived_from_confusion_matrix() {
        let m = metrics(None, Some(vec![vec![90, 10], vec![5, 95]]));
        assert_eq!(m.effective_specificity(), Some(0.9));
        assert_eq!(m.true_positives(), Some(95));
        assert_eq!(m.false_negatives(), Some(5));
    }

    #[test]
    fn test_specificity_zero_denominator() {
        let m = metrics(None, Some(vec![vec![0, 0], vec![5, 95]]));
        assert_eq!(m.effective_specificity(), Some(0.0));
    }

    #[test]
    fn test_specificity_missing_entirely() {
        let m = metrics(None, None);
        assert_eq!(m.effective_specificity(), None);
    }

    #[test]
    fn test_trend_point_legit_count_saturates() {
        let point = TrendPoint {
            transaction_date: "2024-01-01".to_string(),
            fraud_count: 7,
            total_count: 5,
            fraud_percentage: 0.0,
        };
        assert_eq!(point.legit_count(), 0);
    }

    #[test]
    fn test_channel_display_label() {
        let channel = ChannelFraudRate {
            channel: "web".to_string(),
            fraud_percentage: 3.2,
        };
        assert_eq!(channel.display_label(), "Web");
    }
}
