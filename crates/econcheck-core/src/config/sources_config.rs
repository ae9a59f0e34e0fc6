use serde::{Deserialize, Serialize};

use super::defaults;

/// Live reference data source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Exchange-rate endpoint returning a USD-based `rates` map.
    pub forex_endpoint: String,
    /// FRED series observations endpoint, also used for treasury yields.
    pub fred_endpoint: String,
    /// FRED API key. Falls back to the `FRED_API_KEY` environment variable.
    pub fred_api_key: Option<String>,
    /// Retry attempts after the first failed request.
    pub max_retries: u32,
    /// Initial backoff between retries (doubles each attempt).
    pub initial_backoff_ms: u64,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            forex_endpoint: defaults::DEFAULT_FOREX_ENDPOINT.to_string(),
            fred_endpoint: defaults::DEFAULT_FRED_ENDPOINT.to_string(),
            fred_api_key: None,
            max_retries: defaults::DEFAULT_MAX_RETRIES,
            initial_backoff_ms: defaults::DEFAULT_INITIAL_BACKOFF_MS,
        }
    }
}

impl SourcesConfig {
    /// The configured FRED key, or the one from the environment.
    pub fn resolved_fred_api_key(&self) -> Option<String> {
        self.fred_api_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var(defaults::FRED_API_KEY_ENV).ok())
            .filter(|k| !k.is_empty())
    }
}
