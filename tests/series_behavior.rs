use cambio_core::ScriptedHttpClient;
use cambio_tests::{code, day, offline_client};

#[tokio::test]
async fn batch_series_is_strictly_ascending() {
    let (script, client) = offline_client(ScriptedHttpClient::new().on_success(
        "timeseries",
        r#"{"rates":{
            "2024-03-03":{"EUR":0.92},
            "2024-03-01":{"EUR":0.90},
            "2024-03-02":{"EUR":0.91}
        }}"#,
    ));

    let series = client
        .series(&code("USD"), &code("EUR"), day("2024-03-01"), day("2024-03-03"))
        .await
        .expect("range should be valid");

    let dates: Vec<String> = series.points.iter().map(|p| p.date.to_string()).collect();
    assert_eq!(dates, ["2024-03-01", "2024-03-02", "2024-03-03"]);
    assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(!series.fallback);
    assert_eq!(script.requests().len(), 1);
}

#[tokio::test]
async fn day_missing_one_symbol_is_dropped_from_the_batch() {
    let (_, client) = offline_client(ScriptedHttpClient::new().on_success(
        "timeseries",
        r#"{"data":{"rates":{
            "2024-03-01":{"EUR":0.90,"GBP":0.45},
            "2024-03-02":{"EUR":0.91}
        }}}"#,
    ));

    let series = client
        .series(&code("EUR"), &code("GBP"), day("2024-03-01"), day("2024-03-02"))
        .await
        .expect("range should be valid");

    assert_eq!(series.points.len(), 1);
    assert_eq!(series.points[0].date, day("2024-03-01"));
    assert_eq!(series.points[0].rate, 0.5);
}

#[tokio::test]
async fn per_day_fallback_assembles_and_sorts_the_series() {
    let (script, client) = offline_client(
        ScriptedHttpClient::new()
            .on_status("timeseries", 404, r#"{"message":"range not supported"}"#)
            .on_success("date=2024-02-28", r#"{"rates":{"EUR":0.90}}"#)
            .on_error("date=2024-02-29", "connection reset")
            .on_success("date=2024-03-01", r#"{"rates":{"EUR":0.92}}"#),
    );

    let series = client
        .series(&code("USD"), &code("EUR"), day("2024-02-28"), day("2024-03-01"))
        .await
        .expect("range should be valid");

    assert!(series.fallback);
    let dates: Vec<String> = series.points.iter().map(|p| p.date.to_string()).collect();
    assert_eq!(dates, ["2024-02-28", "2024-03-01"]);

    // One batch attempt, then one historical request per calendar day.
    assert_eq!(script.requests().len(), 4);
    // The batch failure, the fallback switch, and the dead day all leave a trace.
    assert_eq!(series.warnings.len(), 3);
}

#[tokio::test]
async fn fully_dead_provider_yields_an_empty_series() {
    let (_, client) = offline_client(
        ScriptedHttpClient::new()
            .on_error("timeseries", "connection refused")
            .on_error("historical", "connection refused"),
    );

    let series = client
        .series(&code("USD"), &code("EUR"), day("2024-03-01"), day("2024-03-02"))
        .await
        .expect("range should be valid");

    assert!(series.points.is_empty());
    assert!(series.fallback);
}
