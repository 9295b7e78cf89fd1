// ============================================================
// FRAUD BACKEND API
// ============================================================
// Async access to the scoring and analytics backend

pub mod client;

pub use client::FraudApiClient;

use async_trait::async_trait;

use crate::domain::error::Result;
use crate::domain::metrics::{
    AmountSample, ChannelFraudRate, FraudStats, ModelMetrics, TrendPoint,
};
use crate::domain::transaction::{
    ExplanationResponse, PredictionResponse, TransactionPayload, TransactionRecord,
};

/// Everything the dashboard asks of the backend service
#[async_trait]
pub trait FraudApi {
    /// Score one transaction
    async fn predict(&self, payload: &TransactionPayload) -> Result<PredictionResponse>;

    /// Natural-language explanation for a scored transaction
    async fn explain(&self, transaction_id: &str) -> Result<ExplanationResponse>;

    /// Most recent scored transactions, newest first
    async fn transactions(&self, limit: usize) -> Result<Vec<TransactionRecord>>;

    /// Delete the entire scored-transaction history
    async fn clear_transactions(&self) -> Result<()>;

    /// Evaluation metrics of the deployed model
    async fn model_metrics(&self) -> Result<ModelMetrics>;

    /// Aggregate fraud/legit counters
    async fn fraud_stats(&self) -> Result<FraudStats>;

    /// Daily fraud counts over time
    async fn fraud_trend(&self) -> Result<Vec<TrendPoint>>;

    /// Fraud rate per transaction channel
    async fn channel_fraud(&self) -> Result<Vec<ChannelFraudRate>>;

    /// Raw amount/label samples for the amount-vs-fraud histogram
    async fn amount_samples(&self) -> Result<Vec<AmountSample>>;
}
