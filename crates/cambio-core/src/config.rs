use std::env;

pub const DEFAULT_BASE_URL: &str = "https://api.currencybeacon.com/v1";
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Upstream provider settings, read once at client construction.
///
/// A missing credential is not an error at this layer: requests are still
/// attempted without the `api_key` parameter and the provider decides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_ms: u64,
}

impl ProviderConfig {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Read settings from the environment: `CAMBIO_API_BASE` for the base
    /// URL and `CAMBIO_API_KEY` (or `CURRENCYBEACON_API_KEY`) for the
    /// credential.
    pub fn from_env() -> Self {
        let base_url =
            env::var("CAMBIO_API_BASE").unwrap_or_else(|_| String::from(DEFAULT_BASE_URL));
        let api_key = env::var("CAMBIO_API_KEY")
            .or_else(|_| env::var("CURRENCYBEACON_API_KEY"))
            .ok();
        Self::new(base_url, api_key)
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, None)
    }
}
