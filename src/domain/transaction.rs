// ============================================================
// TRANSACTION CONTRACTS
// ============================================================
// Request/response payloads exchanged with the scoring backend

use chrono::{DateTime, Datelike, SecondsFormat, Timelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Amount at or above which a transaction is flagged high-value
pub const HIGH_VALUE_THRESHOLD: f64 = 1000.0;

/// Body of `POST /predict`.
///
/// `transaction_id` is a placeholder the server replaces with its own
/// UUID, and `is_fraud` is filled in after scoring; both are still sent
/// because the backend schema requires them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionPayload {
    pub transaction_id: String,
    pub customer_id: String,
    pub kyc_verified: String,
    pub account_age_days: i64,
    pub transaction_amount: f64,
    pub channel: String,
    pub timestamp: String,
    pub is_fraud: String,
    pub hour: u32,
    pub day: u32,
    pub month: u32,
    pub weekday: u32,
    pub is_high_value: u8,
}

impl TransactionPayload {
    /// Build a payload for evaluation, deriving the calendar features the
    /// model expects from the transaction timestamp
    pub fn new(
        customer_id: &str,
        kyc_verified: &str,
        account_age_days: i64,
        transaction_amount: f64,
        channel: &str,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            transaction_id: "temp".to_string(),
            customer_id: customer_id.to_string(),
            kyc_verified: kyc_verified.to_string(),
            account_age_days,
            transaction_amount,
            channel: channel.to_string(),
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            is_fraud: "0".to_string(),
            hour: timestamp.hour(),
            day: timestamp.day(),
            month: timestamp.month(),
            weekday: timestamp.weekday().num_days_from_sunday(),
            is_high_value: if transaction_amount >= HIGH_VALUE_THRESHOLD {
                1
            } else {
                0
            },
        }
    }
}

/// Response of `POST /predict`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub transaction_id: String,

    /// The backend reports the label as a string ("Fraud", "Legit") or a
    /// bare 0/1 depending on the deployed model version
    #[serde(default)]
    pub prediction: serde_json::Value,

    #[serde(default)]
    pub risk_score: f64,

    #[serde(default)]
    pub reason: Option<String>,
}

impl PredictionResponse {
    pub fn is_fraud(&self) -> bool {
        match &self.prediction {
            serde_json::Value::String(label) => {
                let label = label.to_lowercase();
                label == "fraud" || label == "fraudulent" || label == "1"
            }
            serde_json::Value::Number(n) => n.as_i64() == Some(1),
            _ => false,
        }
    }
}

/// Response of `GET /api/llm-explain/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplanationResponse {
    #[serde(default)]
    pub explanation: Option<String>,

    #[serde(default)]
    pub raw_reason: Option<String>,
}

impl ExplanationResponse {
    /// Explanation text to show, falling back to the raw model reason
    pub fn display_text(&self) -> Option<&str> {
        self.explanation
            .as_deref()
            .or(self.raw_reason.as_deref())
            .filter(|text| !text.trim().is_empty())
    }
}

/// One row of the scored-transaction history (`GET /api/transactions`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(default)]
    pub transaction_id: Option<String>,

    #[serde(default)]
    pub customer_id: Option<String>,

    #[serde(default)]
    pub transaction_amount: f64,

    #[serde(default)]
    pub kyc_verified: Option<String>,

    #[serde(default)]
    pub account_age_days: Option<i64>,

    #[serde(default)]
    pub channel: Option<String>,

    #[serde(default)]
    pub timestamp: Option<String>,

    #[serde(default)]
    pub is_fraud: i64,
}

/// Derive a customer id from the signed-in user's email or first name,
/// with a short random suffix so repeated checks stay distinguishable.
/// Falls back to "guest" when neither is available.
pub fn derive_customer_id(email: Option<&str>, first_name: Option<&str>) -> String {
    let base = email
        .and_then(|address| address.trim().split('@').next())
        .filter(|part| !part.is_empty())
        .or_else(|| first_name.map(str::trim).filter(|name| !name.is_empty()))
        .unwrap_or("guest");
    let suffix: String = Uuid::new_v4().simple().to_string().chars().take(6).collect();
    format!("{}-{}", base, suffix)
}

/// Display formatting for transaction ids ("TXN-…"); "-" when missing
pub fn format_txn_id(id: &str) -> String {
    format_id(id, "TXN")
}

/// Display formatting for customer ids ("CUST-…"); "-" when missing
pub fn format_customer_id(id: &str) -> String {
    format_id(id, "CUST")
}

fn format_id(id: &str, prefix: &str) -> String {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        "-".to_string()
    } else {
        format!("{}-{}", prefix, trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_payload_derives_calendar_fields() {
        // 2024-03-15 is a Friday
        let timestamp = Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap();
        let payload =
            TransactionPayload::new("alice-abc123", "Yes", 200, 250.0, "web", timestamp);
        assert_eq!(payload.hour, 14);
        assert_eq!(payload.day, 15);
        assert_eq!(payload.month, 3);
        assert_eq!(payload.weekday, 5);
        assert_eq!(payload.is_high_value, 0);
        assert_eq!(payload.is_fraud, "0");
        assert!(payload.timestamp.starts_with("2024-03-15T14:30:00"));
    }

    #[test]
    fn test_high_value_flag_at_threshold() {
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let payload = TransactionPayload::new("c", "No", 10, 1000.0, "atm", timestamp);
        assert_eq!(payload.is_high_value, 1);
    }

    #[test]
    fn test_prediction_label_variants() {
        let mut response = PredictionResponse {
            transaction_id: "t1".to_string(),
            prediction: serde_json::Value::String("Fraud".to_string()),
            risk_score: 0.9,
            reason: None,
        };
        assert!(response.is_fraud());

        response.prediction = serde_json::json!(1);
        assert!(response.is_fraud());

        response.prediction = serde_json::Value::String("Legit".to_string());
        assert!(!response.is_fraud());

        response.prediction = serde_json::json!(0);
        assert!(!response.is_fraud());
    }

    #[test]
    fn test_derive_customer_id_prefers_email_local_part() {
        let id = derive_customer_id(Some("alice@example.com"), Some("Bob"));
        assert!(id.starts_with("alice-"));
        assert_eq!(id.len(), "alice-".len() + 6);
    }

    #[test]
    fn test_derive_customer_id_guest_fallback() {
        let id = derive_customer_id(None, Some("  "));
        assert!(id.starts_with("guest-"));
    }

    #[test]
    fn test_id_display_formatting() {
        assert_eq!(format_txn_id("9f3a"), "TXN-9f3a");
        assert_eq!(format_customer_id(""), "-");
    }
}
