//! Client configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default collection service URL.
pub const DEFAULT_SERVER: &str = "http://localhost:3000";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`super::HttpRecipeApi`].
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the collection service.
    pub base_url: String,
    /// Request timeout. Requests are never cancelled client-side beyond
    /// this transport-level limit.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVER.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!("skillet/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `SKILLET_SERVER`: base URL of the collection service
    ///   (default: "http://localhost:3000")
    /// - `SKILLET_TIMEOUT_SECS`: request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        let base_url = env::var("SKILLET_SERVER").unwrap_or_else(|_| DEFAULT_SERVER.to_string());

        let timeout_secs = env::var("SKILLET_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            ..Self::default()
        }
    }

    /// Override the base URL (e.g. from a `--server` flag).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
