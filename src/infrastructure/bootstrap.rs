// ============================================================
// BOOTSTRAP
// ============================================================
// Process-level initialization: env file, logging, configuration

use tracing_subscriber::EnvFilter;

use crate::domain::error::Result;
use crate::infrastructure::config::AppConfig;

/// Install the global tracing subscriber. Respects RUST_LOG and
/// defaults to `info`. Safe to call more than once; later calls are
/// no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Load `.env` overrides (when present), set up logging, and read the
/// application configuration
pub fn init() -> Result<AppConfig> {
    let _ = dotenvy::dotenv();
    init_tracing();
    AppConfig::load()
}
