use std::sync::Arc;
use std::time::Duration;

use crate::cache::{CurrencyCache, CurrencyListing, DEFAULT_TTL};
use crate::config::ProviderConfig;
use crate::convert::{self, Conversion};
use crate::domain::{CurrencyCode, CurrencyKind, Day};
use crate::error::{ProviderError, ValidationError};
use crate::http::{HttpClient, ReqwestHttpClient};
use crate::names::{EnglishNames, NameResolver};
use crate::store::{KvStore, MemoryStore};
use crate::timeseries::{self, RateSeries};
use crate::transport::Transport;

/// Currency-conversion client: transport, catalog cache, and rate engines
/// behind one handle.
pub struct Client {
    transport: Transport,
    cache: CurrencyCache,
    resolver: Arc<dyn NameResolver>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Catalog for one currency category, served from cache when fresh.
    /// Never fails; degraded loads carry warnings instead.
    pub async fn currencies(&self, kind: CurrencyKind) -> CurrencyListing {
        self.cache
            .get(kind, &self.transport, self.resolver.as_ref())
            .await
    }

    /// Convert an amount, falling back to a USD cross-rate when the direct
    /// endpoint fails or returns no usable result.
    pub async fn convert(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
        amount: f64,
    ) -> Result<Conversion, ProviderError> {
        convert::convert(&self.transport, from, to, amount).await
    }

    /// Historical rate series over an inclusive `YYYY-MM-DD` range.
    pub async fn series(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
        start: Day,
        end: Day,
    ) -> Result<RateSeries, ValidationError> {
        if start > end {
            return Err(ValidationError::InvalidDateRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(timeseries::series(&self.transport, from, to, start, end).await)
    }
}

/// Builder for a [`Client`] with injectable transport, store, and name
/// resolution. Defaults: environment-derived provider config, reqwest
/// transport, in-memory store, English display names.
pub struct ClientBuilder {
    config: ProviderConfig,
    http: Option<Arc<dyn HttpClient>>,
    store: Option<Arc<dyn KvStore>>,
    resolver: Option<Arc<dyn NameResolver>>,
    cache_ttl: Duration,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            config: ProviderConfig::from_env(),
            http: None,
            store: None,
            resolver: None,
            cache_ttl: DEFAULT_TTL,
        }
    }

    pub fn with_config(mut self, config: ProviderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(api_key.into());
        self
    }

    pub fn with_http_client(mut self, http: Arc<dyn HttpClient>) -> Self {
        self.http = Some(http);
        self
    }

    pub fn with_store(mut self, store: Arc<dyn KvStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_name_resolver(mut self, resolver: Arc<dyn NameResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn build(self) -> Client {
        let http = self
            .http
            .unwrap_or_else(|| Arc::new(ReqwestHttpClient::new()));
        let store = self.store.unwrap_or_else(|| Arc::new(MemoryStore::new()));
        let resolver = self.resolver.unwrap_or_else(|| Arc::new(EnglishNames));

        Client {
            transport: Transport::new(http, self.config),
            cache: CurrencyCache::with_ttl(store, self.cache_ttl),
            resolver,
        }
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
