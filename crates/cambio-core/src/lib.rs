//! # Cambio Core
//!
//! Conversion, normalization, and caching engine for the cambio currency
//! tool.
//!
//! ## Overview
//!
//! The upstream rate provider returns inconsistently shaped payloads and
//! its endpoints degrade independently. This crate absorbs both problems:
//!
//! - **Multi-shape normalization** of currency catalogs and rate maps
//! - **Fallback computation** (USD cross-rates, per-day historical
//!   requests) when a primary endpoint fails
//! - **Read-through catalog caching** with structural re-validation
//! - **Auditable degradation**: swallowed failures surface as warnings on
//!   results, never as thrown errors on the catalog path
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`cache`] | Read-through currency catalog cache |
//! | [`client`] | `Client`/`ClientBuilder` facade |
//! | [`config`] | Provider base URL and credential settings |
//! | [`convert`] | Conversion engine with USD cross-rate fallback |
//! | [`domain`] | Validated codes, catalog entries, calendar days |
//! | [`error`] | Error taxonomy |
//! | [`http`] | HTTP client abstraction (reqwest/scripted) |
//! | [`names`] | Display-name resolution |
//! | [`normalize`] | Payload normalizers |
//! | [`query`] | Query-string builder |
//! | [`store`] | Key-value store behind the cache |
//! | [`timeseries`] | Historical series engine with per-day fallback |
//! | [`transport`] | Single-request GET layer |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cambio_core::{Client, CurrencyCode};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::builder().build();
//!
//!     let eur = CurrencyCode::parse("EUR")?;
//!     let usd = CurrencyCode::parse("USD")?;
//!     let conversion = client.convert(&usd, &eur, 100.0).await?;
//!     println!("100 USD = {:.2} EUR", conversion.result);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Catalog loading never fails: transport and normalization errors degrade
//! to an empty or partial list with warnings attached. Conversion swallows
//! primary-path failures and only surfaces errors from the fallback path.
//! Series building swallows individual day failures entirely.

pub mod cache;
pub mod client;
pub mod config;
pub mod convert;
pub mod domain;
pub mod error;
pub mod http;
pub mod names;
pub mod normalize;
pub mod query;
pub mod store;
pub mod timeseries;
pub mod transport;

// Re-export commonly used types at crate root for convenience

pub use cache::{CurrencyCache, CurrencyListing, DEFAULT_NAMESPACE, DEFAULT_TTL};
pub use client::{Client, ClientBuilder};
pub use config::{ProviderConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
pub use convert::{Conversion, ConversionMeta, ConversionSource};
pub use domain::{sort_currencies, Currency, CurrencyCode, CurrencyKind, Day, DayRange};
pub use error::{ProviderError, ValidationError};
pub use http::{
    HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient, ScriptedHttpClient,
};
pub use names::{EnglishNames, NameResolver, NoNames};
pub use normalize::{backfill_names, normalize_currency_list, normalize_rate_map};
pub use query::QueryParams;
pub use store::{JsonFileStore, KvStore, MemoryStore};
pub use timeseries::{RateSeries, SeriesPoint};
pub use transport::{Endpoint, Transport};
