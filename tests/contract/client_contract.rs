// Contract tests for the public client surface: every operation must be
// drivable offline through an injected transport and store.

use std::sync::Arc;

use cambio_core::{
    Client, CurrencyCode, CurrencyKind, Day, MemoryStore, ProviderConfig, ScriptedHttpClient,
};

fn offline_client(script: ScriptedHttpClient) -> (Arc<ScriptedHttpClient>, Client) {
    let script = Arc::new(script);
    let client = Client::builder()
        .with_config(ProviderConfig::new(
            "https://api.test/v1",
            Some(String::from("contract-key")),
        ))
        .with_http_client(script.clone())
        .with_store(Arc::new(MemoryStore::new()))
        .build();
    (script, client)
}

#[tokio::test]
async fn every_request_carries_the_configured_credential() {
    let (script, client) = offline_client(
        ScriptedHttpClient::new()
            .on_success("currencies", r#"{"response":{"currencies":[]}}"#)
            .on_success("latest", r#"{"rates":{}}"#)
            .on_success("convert", r#"{"result":1}"#),
    );

    client.currencies(CurrencyKind::Fiat).await;
    let from = CurrencyCode::parse("USD").expect("valid code");
    let to = CurrencyCode::parse("USD").expect("valid code");
    client
        .convert(&from, &to, 1.0)
        .await
        .expect("conversion should succeed");

    let requests = script.requests();
    assert!(!requests.is_empty());
    for url in &requests {
        assert!(
            url.ends_with("api_key=contract-key"),
            "credential not appended last in {url}"
        );
    }
}

#[tokio::test]
async fn catalog_loading_never_surfaces_an_error() {
    let (_, client) = offline_client(
        ScriptedHttpClient::new()
            .on_error("currencies", "connection refused")
            .on_error("latest", "connection refused"),
    );

    // A fully dead provider still yields a listing.
    let listing = client.currencies(CurrencyKind::Crypto).await;
    assert!(listing.items.is_empty());
    assert!(!listing.warnings.is_empty());
}

#[tokio::test]
async fn series_points_never_repeat_a_date() {
    let (_, client) = offline_client(ScriptedHttpClient::new().on_success(
        "timeseries",
        r#"{"rates":{
            "2024-01-01":{"EUR":0.9},
            "2024-01-02":{"EUR":0.91},
            "2024-01-03":{"EUR":0.92}
        }}"#,
    ));

    let from = CurrencyCode::parse("USD").expect("valid code");
    let to = CurrencyCode::parse("EUR").expect("valid code");
    let series = client
        .series(
            &from,
            &to,
            Day::parse("2024-01-01").expect("valid date"),
            Day::parse("2024-01-03").expect("valid date"),
        )
        .await
        .expect("range should be valid");

    let mut dates: Vec<Day> = series.points.iter().map(|p| p.date).collect();
    let sorted = dates.clone();
    dates.dedup();
    assert_eq!(dates, sorted);
    assert_eq!(dates.len(), 3);
}
