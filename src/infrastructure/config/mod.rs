// ============================================================
// APPLICATION CONFIGURATION
// ============================================================
// Defaults merged with txintel.toml and TXINTEL_* env overrides

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::dataset::AnalysisConfig;
use crate::domain::error::{AppError, Result};

/// Runtime configuration for the dashboard core
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the scoring backend
    pub api_base_url: String,

    /// Maximum number of history rows requested from the backend
    pub history_limit: usize,

    /// Dataset analysis tuning
    pub analysis: AnalysisConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000".to_string(),
            history_limit: 10_000,
            analysis: AnalysisConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then `txintel.toml`, then
    /// `TXINTEL_`-prefixed environment variables (nested keys joined
    /// with `__`, e.g. `TXINTEL_ANALYSIS__TOP_CATEGORIES`)
    pub fn load() -> Result<Self> {
        let config: AppConfig = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("txintel.toml"))
            .merge(Env::prefixed("TXINTEL_").split("__"))
            .extract()
            .map_err(|e| AppError::ValidationError(format!("Invalid configuration: {}", e)))?;
        config.analysis.validate().map_err(AppError::ValidationError)?;
        Ok(config)
    }
}
