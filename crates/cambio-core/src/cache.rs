use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::{sort_currencies, Currency, CurrencyCode, CurrencyKind};
use crate::names::NameResolver;
use crate::normalize::{backfill_names, normalize_currency_list, normalize_rate_map};
use crate::query::QueryParams;
use crate::store::KvStore;
use crate::transport::{Endpoint, Transport};

pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);
pub const DEFAULT_NAMESPACE: &str = "cambio_currencies";

/// Catalogs smaller than this signal a degraded or empty primary endpoint
/// and trigger the latest-rates synthesis.
const MIN_CATALOG_LEN: usize = 5;

/// Stored cache record: write timestamp (epoch milliseconds) plus the
/// normalized list. Deserializing re-validates every code, so an entry
/// holding a malformed code is rejected wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheEntry {
    at: i64,
    items: Vec<Currency>,
}

/// Catalog load outcome: the list, its cache provenance, and any failures
/// swallowed along the way.
#[derive(Debug, Clone)]
pub struct CurrencyListing {
    pub items: Vec<Currency>,
    pub cache_hit: bool,
    pub warnings: Vec<String>,
}

/// Read-through cache for the currency catalog, one record per category.
///
/// This layer never fails: fetch and normalization errors degrade to an
/// empty (or partial) list and are recorded as warnings on the listing.
pub struct CurrencyCache {
    store: Arc<dyn KvStore>,
    ttl: Duration,
    namespace: String,
}

impl CurrencyCache {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self::with_ttl(store, DEFAULT_TTL)
    }

    pub fn with_ttl(store: Arc<dyn KvStore>, ttl: Duration) -> Self {
        Self {
            store,
            ttl,
            namespace: String::from(DEFAULT_NAMESPACE),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn key(&self, kind: CurrencyKind) -> String {
        format!("{}_{}", self.namespace, kind.as_str())
    }

    /// Load the catalog for one category, serving a stored copy when it is
    /// fresh and structurally sound.
    pub async fn get(
        &self,
        kind: CurrencyKind,
        transport: &Transport,
        resolver: &dyn NameResolver,
    ) -> CurrencyListing {
        let key = self.key(kind);
        if let Some(items) = self.read_fresh(&key) {
            return CurrencyListing {
                items,
                cache_hit: true,
                warnings: Vec::new(),
            };
        }

        let mut warnings = Vec::new();
        let params = QueryParams::new().set("type", kind);
        let mut items = match transport.get_json(Endpoint::Currencies, params).await {
            Ok(payload) => normalize_currency_list(&payload, kind, resolver),
            Err(error) => {
                warnings.push(format!("currency catalog fetch failed: {error}"));
                Vec::new()
            }
        };

        if items.len() < MIN_CATALOG_LEN {
            warnings.push(format!(
                "currency catalog has {} entries; deriving catalog from latest rates",
                items.len()
            ));
            if let Some(derived) = self.derive_from_rates(transport, &mut warnings).await {
                items = derived;
            }
        }

        backfill_names(&mut items, resolver);
        sort_currencies(&mut items);
        self.write(&key, &items);

        CurrencyListing {
            items,
            cache_hit: false,
            warnings,
        }
    }

    fn read_fresh(&self, key: &str) -> Option<Vec<Currency>> {
        let raw = self.store.get(key)?;
        let entry: CacheEntry = serde_json::from_str(&raw).ok()?;
        let age_ms = now_ms().saturating_sub(entry.at);
        (age_ms < self.ttl.as_millis() as i64).then_some(entry.items)
    }

    /// Synthesize a catalog from the latest-rates keys plus a mandatory
    /// USD seed. Names start equal to codes; the caller backfills them.
    async fn derive_from_rates(
        &self,
        transport: &Transport,
        warnings: &mut Vec<String>,
    ) -> Option<Vec<Currency>> {
        match transport.get_json(Endpoint::Latest, QueryParams::new()).await {
            Ok(payload) => {
                let rates = normalize_rate_map(&payload);
                let mut codes: Vec<String> = rates.into_keys().collect();
                codes.push(String::from("USD"));
                codes.sort();
                codes.dedup();

                let items = codes
                    .iter()
                    .filter_map(|raw| CurrencyCode::parse(raw).ok())
                    .map(|code| {
                        let name = code.as_str().to_owned();
                        Currency::new(code, name)
                    })
                    .collect();
                Some(items)
            }
            Err(error) => {
                warnings.push(format!("latest-rates fallback failed: {error}"));
                None
            }
        }
    }

    fn write(&self, key: &str, items: &[Currency]) {
        let entry = CacheEntry {
            at: now_ms(),
            items: items.to_vec(),
        };
        if let Ok(raw) = serde_json::to_string(&entry) {
            self.store.set(key, &raw);
        }
    }
}

fn now_ms() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}
