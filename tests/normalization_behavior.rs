use cambio_core::{normalize_currency_list, normalize_rate_map, CurrencyKind, NoNames};
use serde_json::json;

#[test]
fn every_supported_catalog_shape_normalizes_to_the_same_list() {
    let shapes = [
        json!({"response": {"currencies": [
            {"short_code": "EUR", "name": "Euro"},
            {"short_code": "USD", "name": "US Dollar"},
        ]}}),
        json!({"currencies": {
            "EUR": "Euro",
            "USD": "US Dollar",
        }}),
        json!({"data": {"currencies": {
            "EUR": {"name": "Euro"},
            "USD": {"name": "US Dollar"},
        }}}),
        json!([
            {"code": "USD", "name": "US Dollar"},
            {"code": "EUR", "name": "Euro"},
        ]),
    ];

    for payload in &shapes {
        let items = normalize_currency_list(payload, CurrencyKind::Fiat, &NoNames);
        let summary: Vec<(&str, &str)> = items
            .iter()
            .map(|c| (c.code.as_str(), c.name.as_str()))
            .collect();
        assert_eq!(
            summary,
            [("EUR", "Euro"), ("USD", "US Dollar")],
            "shape failed: {payload}"
        );
    }
}

#[test]
fn invalid_codes_are_dropped_from_every_shape() {
    let payload = json!({
        "currencies": {
            "E1": "Bad key",
            "EURO2": {"name": "Bad key too"},
            "GBP": "British Pound",
        },
        "data": {"currencies": [
            {"code": "toolong", "name": "Too long"},
            {"code": "JPY", "name": "Japanese Yen"},
        ]},
    });

    let items = normalize_currency_list(&payload, CurrencyKind::Fiat, &NoNames);
    let codes: Vec<&str> = items.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, ["GBP", "JPY"]);
}

#[test]
fn duplicate_codes_collapse_to_the_last_probed_record() {
    let payload = json!({
        "response": {"currencies": [{"code": "CHF", "name": "Franc (old)"}]},
        "currencies": [{"code": "CHF", "name": "Swiss Franc", "symbol": "Fr"}],
    });

    let items = normalize_currency_list(&payload, CurrencyKind::Fiat, &NoNames);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Swiss Franc");
    assert_eq!(items[0].symbol.as_deref(), Some("Fr"));
}

#[test]
fn rate_maps_are_case_normalized_and_lenient() {
    let payload = json!({
        "response": {"rates": {
            "eur": 0.92,
            "GBP": "0.79",
            "bad": "oops",
            "inf": null,
        }}
    });

    let rates = normalize_rate_map(&payload);
    assert_eq!(rates.len(), 2);
    assert_eq!(rates.get("EUR"), Some(&0.92));
    assert_eq!(rates.get("GBP"), Some(&0.79));
}
