use cambio_core::{CurrencyKind, ScriptedHttpClient};
use cambio_tests::offline_client;

const CATALOG: &str = r#"{"response":{"currencies":[
    {"short_code":"USD","name":"US Dollar","symbol":"$"},
    {"short_code":"EUR","name":"Euro"},
    {"short_code":"GBP","name":"British Pound"},
    {"short_code":"JPY","name":"Japanese Yen"},
    {"short_code":"CHF","name":"Swiss Franc"}
]}}"#;

#[tokio::test]
async fn repeated_catalog_reads_hit_the_cache() {
    let (script, client) = offline_client(ScriptedHttpClient::new().on_success("currencies", CATALOG));

    let first = client.currencies(CurrencyKind::Fiat).await;
    assert!(!first.cache_hit);
    assert_eq!(first.items.len(), 5);

    let second = client.currencies(CurrencyKind::Fiat).await;
    assert!(second.cache_hit);
    assert_eq!(second.items, first.items);

    // Only the first read touched the network.
    assert_eq!(script.requests().len(), 1);
}

#[tokio::test]
async fn categories_are_cached_independently() {
    let (script, client) = offline_client(
        ScriptedHttpClient::new()
            .on_success("type=fiat", CATALOG)
            .on_success(
                "type=crypto",
                r#"{"response":{"crypto":[
                    {"ticker":"BTC","name":"Bitcoin"},
                    {"ticker":"ETH","name":"Ethereum"},
                    {"ticker":"SOL","name":"Solana"},
                    {"ticker":"ADA","name":"Cardano"},
                    {"ticker":"DOGE","name":"Dogecoin"}
                ]}}"#,
            ),
    );

    let fiat = client.currencies(CurrencyKind::Fiat).await;
    let crypto = client.currencies(CurrencyKind::Crypto).await;
    assert_eq!(fiat.items.len(), 5);
    assert_eq!(crypto.items.len(), 5);
    assert_eq!(script.requests().len(), 2);

    // Second crypto read is served without a new fetch.
    let again = client.currencies(CurrencyKind::Crypto).await;
    assert!(again.cache_hit);
    assert_eq!(script.requests().len(), 2);
}

#[tokio::test]
async fn degraded_catalog_is_synthesized_from_latest_rates() {
    let (_, client) = offline_client(
        ScriptedHttpClient::new()
            .on_success("currencies", r#"{"response":{"currencies":[]}}"#)
            .on_success("latest", r#"{"rates":{"EUR":0.92,"GBP":0.79}}"#),
    );

    let listing = client.currencies(CurrencyKind::Fiat).await;
    let codes: Vec<&str> = listing.items.iter().map(|c| c.code.as_str()).collect();

    // Rate-map keys plus the mandatory USD seed, with resolver-backfilled names.
    assert!(codes.contains(&"USD"));
    assert!(codes.contains(&"EUR"));
    assert!(codes.contains(&"GBP"));
    let usd = listing
        .items
        .iter()
        .find(|c| c.code.as_str() == "USD")
        .expect("USD present");
    assert_eq!(usd.name, "US Dollar");
    assert!(!listing.warnings.is_empty());
}

#[tokio::test]
async fn dead_endpoints_degrade_to_an_empty_listing_not_an_error() {
    let (_, client) = offline_client(
        ScriptedHttpClient::new()
            .on_status("currencies", 503, "maintenance")
            .on_status("latest", 503, "maintenance"),
    );

    let listing = client.currencies(CurrencyKind::Fiat).await;
    assert!(listing.items.is_empty());
    assert!(!listing.warnings.is_empty());
}
