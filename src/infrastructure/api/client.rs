// ============================================================
// FRAUD API CLIENT
// ============================================================
// reqwest implementation of the FraudApi trait

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::FraudApi;
use crate::domain::error::{AppError, Result};
use crate::domain::metrics::{
    AmountSample, ChannelFraudRate, FraudStats, ModelMetrics, TrendPoint,
};
use crate::domain::transaction::{
    ExplanationResponse, PredictionResponse, TransactionPayload, TransactionRecord,
};

/// HTTP client for the fraud backend. No retry or timeout policy beyond
/// reqwest defaults; a failed call surfaces as an error and leaves the
/// caller's state untouched.
pub struct FraudApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl FraudApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!(path, "backend GET");
        let response = self
            .client
            .get(self.endpoint(path))
            .send()
            .await
            .map_err(|e| AppError::ApiError(format!("Request failed: {}", e)))?;
        let response = Self::check_status(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {}", e)))
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::ApiError(format!(
            "Backend returned {}: {}",
            status, body
        )))
    }
}

#[async_trait]
impl FraudApi for FraudApiClient {
    async fn predict(&self, payload: &TransactionPayload) -> Result<PredictionResponse> {
        debug!(
            amount = payload.transaction_amount,
            channel = %payload.channel,
            "scoring transaction"
        );
        let response = self
            .client
            .post(self.endpoint("/predict"))
            .json(payload)
            .send()
            .await
            .map_err(|e| AppError::ApiError(format!("Request failed: {}", e)))?;
        let response = Self::check_status(response).await?;
        response
            .json::<PredictionResponse>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {}", e)))
    }

    async fn explain(&self, transaction_id: &str) -> Result<ExplanationResponse> {
        self.get_json(&format!("/api/llm-explain/{}", transaction_id))
            .await
    }

    async fn transactions(&self, limit: usize) -> Result<Vec<TransactionRecord>> {
        self.get_json(&format!("/api/transactions?limit={}", limit))
            .await
    }

    async fn clear_transactions(&self) -> Result<()> {
        let response = self
            .client
            .delete(self.endpoint("/api/transactions"))
            .send()
            .await
            .map_err(|e| AppError::ApiError(format!("Request failed: {}", e)))?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn model_metrics(&self) -> Result<ModelMetrics> {
        self.get_json("/api/model-info").await
    }

    async fn fraud_stats(&self) -> Result<FraudStats> {
        self.get_json("/api/fraud-stats").await
    }

    async fn fraud_trend(&self) -> Result<Vec<TrendPoint>> {
        self.get_json("/api/analytics/timeseries").await
    }

    async fn channel_fraud(&self) -> Result<Vec<ChannelFraudRate>> {
        self.get_json("/api/analytics/channels").await
    }

    async fn amount_samples(&self) -> Result<Vec<AmountSample>> {
        self.get_json("/api/analytics/amount_vs_fraud").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let client = FraudApiClient::new("http://127.0.0.1:8000/");
        assert_eq!(
            client.endpoint("/predict"),
            "http://127.0.0.1:8000/predict"
        );
    }

    #[tokio::test]
    async fn test_unreachable_backend_surfaces_api_error() {
        // Port 1 has no listener; the connection error must come back as
        // an ApiError, not a panic
        let client = FraudApiClient::new("http://127.0.0.1:1");
        let result = client.fraud_stats().await;
        assert!(matches!(result, Err(AppError::ApiError(_))));
    }
}
