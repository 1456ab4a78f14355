use std::collections::HashMap;

use serde_json::Value;

/// Extract a `CODE -> rate` map from an arbitrary payload.
///
/// The rates object is taken from `rates` or `response.rates`, first
/// present wins. Entries are kept only when the value coerces to a finite
/// number; keys are uppercased. Absence of a rates object yields an empty
/// map, never an error.
pub fn normalize_rate_map(payload: &Value) -> HashMap<String, f64> {
    let rates = payload
        .get("rates")
        .or_else(|| payload.get("response").and_then(|r| r.get("rates")));

    let Some(Value::Object(entries)) = rates else {
        return HashMap::new();
    };

    let mut map = HashMap::with_capacity(entries.len());
    for (code, value) in entries {
        if let Some(rate) = finite_number(value) {
            map.insert(code.trim().to_ascii_uppercase(), rate);
        }
    }
    map
}

/// Best-effort numeric coercion: JSON numbers and numeric strings, finite
/// values only.
pub(crate) fn finite_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_top_level_rates() {
        let rates = normalize_rate_map(&json!({"rates": {"eur": 0.92, "GBP": 0.79}}));
        assert_eq!(rates.get("EUR"), Some(&0.92));
        assert_eq!(rates.get("GBP"), Some(&0.79));
    }

    #[test]
    fn reads_nested_response_rates() {
        let rates = normalize_rate_map(&json!({"response": {"rates": {"JPY": 151.2}}}));
        assert_eq!(rates.get("JPY"), Some(&151.2));
    }

    #[test]
    fn top_level_wins_over_nested() {
        let payload = json!({
            "rates": {"EUR": 1.0},
            "response": {"rates": {"EUR": 2.0}},
        });
        assert_eq!(normalize_rate_map(&payload).get("EUR"), Some(&1.0));
    }

    #[test]
    fn accepts_numeric_strings_and_drops_junk() {
        let payload = json!({"rates": {"EUR": "0.92", "GBP": "n/a", "CHF": null, "SEK": [1]}});
        let rates = normalize_rate_map(&payload);
        assert_eq!(rates.get("EUR"), Some(&0.92));
        assert_eq!(rates.len(), 1);
    }

    #[test]
    fn missing_rates_object_yields_empty_map() {
        assert!(normalize_rate_map(&json!({"data": 1})).is_empty());
        assert!(normalize_rate_map(&json!({"rates": "none"})).is_empty());
        assert!(normalize_rate_map(&json!(null)).is_empty());
    }
}
