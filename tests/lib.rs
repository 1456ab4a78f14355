// Shared helpers for the behavior test suites.
pub use cambio_core::{
    Client, ClientBuilder, Currency, CurrencyCode, CurrencyKind, Day, MemoryStore, NoNames,
    ProviderConfig, ScriptedHttpClient,
};
pub use std::sync::Arc;

/// Client wired to a scripted transport and an in-memory store.
pub fn offline_client(script: ScriptedHttpClient) -> (Arc<ScriptedHttpClient>, Client) {
    let script = Arc::new(script);
    let client = Client::builder()
        .with_config(ProviderConfig::new("https://api.test/v1", None))
        .with_http_client(script.clone())
        .with_store(Arc::new(MemoryStore::new()))
        .build();
    (script, client)
}

pub fn code(raw: &str) -> CurrencyCode {
    CurrencyCode::parse(raw).expect("valid code")
}

pub fn day(raw: &str) -> Day {
    Day::parse(raw).expect("valid date")
}
