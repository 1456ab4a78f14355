use std::collections::HashMap;

use serde_json::Value;

use crate::domain::{sort_currencies, Currency, CurrencyCode, CurrencyKind};
use crate::names::NameResolver;

/// Field candidates for a record's currency code, in probe order.
const CODE_FIELDS: [&str; 5] = ["short_code", "code", "iso_code", "ticker", "currency"];
/// Field candidates for a record's display name, in probe order.
const NAME_FIELDS: [&str; 5] = ["name", "currency_name", "fullName", "currency", "label"];
/// Field candidates for a record's symbol glyph, in probe order.
const SYMBOL_FIELDS: [&str; 3] = ["symbol", "symbol_native", "sign"];

type Probe = for<'a> fn(&'a Value, CurrencyKind) -> Option<&'a Value>;

/// Candidate locations where a payload may carry its currency collection.
/// Every location is probed; a payload may mix shapes, so probing never
/// short-circuits at the first hit.
const COLLECTION_PROBES: [Probe; 7] = [
    probe_response_currencies,
    probe_response_category,
    probe_currencies,
    probe_data_currencies,
    probe_data_category,
    probe_response,
    probe_root,
];

fn probe_response_currencies<'a>(payload: &'a Value, _: CurrencyKind) -> Option<&'a Value> {
    payload.get("response")?.get("currencies")
}

fn probe_response_category<'a>(payload: &'a Value, kind: CurrencyKind) -> Option<&'a Value> {
    payload.get("response")?.get(kind.as_str())
}

fn probe_currencies<'a>(payload: &'a Value, _: CurrencyKind) -> Option<&'a Value> {
    payload.get("currencies")
}

fn probe_data_currencies<'a>(payload: &'a Value, _: CurrencyKind) -> Option<&'a Value> {
    payload.get("data")?.get("currencies")
}

fn probe_data_category<'a>(payload: &'a Value, kind: CurrencyKind) -> Option<&'a Value> {
    payload.get("data")?.get(kind.as_str())
}

fn probe_response<'a>(payload: &'a Value, _: CurrencyKind) -> Option<&'a Value> {
    payload.get("response")
}

fn probe_root<'a>(payload: &'a Value, _: CurrencyKind) -> Option<&'a Value> {
    Some(payload)
}

/// Reconcile an arbitrary payload into a deduplicated, sorted currency
/// list for one category.
///
/// Accepted records accumulate into a code-keyed table; a later probe
/// location overwrites an earlier entry with the same code. Records whose
/// code fails validation are dropped, not retried. Names are backfilled
/// from `resolver` and the list is sorted by name, then code.
pub fn normalize_currency_list(
    payload: &Value,
    kind: CurrencyKind,
    resolver: &dyn NameResolver,
) -> Vec<Currency> {
    let mut table: HashMap<CurrencyCode, Currency> = HashMap::new();
    for probe in COLLECTION_PROBES {
        if let Some(collection) = probe(payload, kind) {
            collect_candidates(collection, &mut table);
        }
    }

    let mut items: Vec<Currency> = table.into_values().collect();
    backfill_names(&mut items, resolver);
    sort_currencies(&mut items);
    items
}

/// Fill in display names for entries whose name is empty or merely echoes
/// the code. Entries the resolver cannot name keep their existing name.
pub fn backfill_names(items: &mut [Currency], resolver: &dyn NameResolver) {
    for currency in items {
        let name = currency.name.trim();
        let placeholder = name.is_empty() || name.eq_ignore_ascii_case(currency.code.as_str());
        if placeholder {
            if let Some(resolved) = resolver.display_name(currency.code.as_str()) {
                currency.name = resolved;
            }
        }
    }
}

fn collect_candidates(collection: &Value, table: &mut HashMap<CurrencyCode, Currency>) {
    match collection {
        Value::Array(records) => {
            for record in records {
                if let Some(currency) = currency_from_record(record, None) {
                    table.insert(currency.code.clone(), currency);
                }
            }
        }
        Value::Object(entries) => {
            for (key, value) in entries {
                let currency = match value {
                    Value::String(name) => CurrencyCode::parse(key)
                        .ok()
                        .map(|code| Currency::new(code, name.clone())),
                    Value::Object(_) => currency_from_record(value, Some(key)),
                    _ => None,
                };
                if let Some(currency) = currency {
                    table.insert(currency.code.clone(), currency);
                }
            }
        }
        _ => {}
    }
}

/// Build one currency from a record object. The code comes from the first
/// non-empty code field; when that candidate fails the pattern (or no code
/// field is present), `fallback_key` is tried instead. Records with no
/// acceptable code are dropped.
///
/// The key fallback is gated on the record carrying at least one currency
/// field: without it, wrapper keys like `data` or `meta` uppercase into
/// pattern-valid codes and leak container objects into the catalog.
fn currency_from_record(record: &Value, fallback_key: Option<&str>) -> Option<Currency> {
    let explicit = first_text(record, &CODE_FIELDS).and_then(|raw| CurrencyCode::parse(&raw).ok());
    let code = match explicit {
        Some(code) => code,
        None => {
            if !has_currency_fields(record) {
                return None;
            }
            CurrencyCode::parse(fallback_key?).ok()?
        }
    };

    let name = first_text(record, &NAME_FIELDS).unwrap_or_else(|| code.as_str().to_owned());
    let mut currency = Currency::new(code, name);
    if let Some(symbol) = first_text(record, &SYMBOL_FIELDS) {
        currency = currency.with_symbol(symbol);
    }
    Some(currency)
}

/// True when the record carries any recognizable currency field.
fn has_currency_fields(record: &Value) -> bool {
    first_text(record, &CODE_FIELDS).is_some()
        || first_text(record, &NAME_FIELDS).is_some()
        || first_text(record, &SYMBOL_FIELDS).is_some()
}

/// First non-empty (after trimming) string value among `fields`.
fn first_text(record: &Value, fields: &[&str]) -> Option<String> {
    fields.iter().find_map(|field| {
        let text = record.get(*field)?.as_str()?.trim();
        (!text.is_empty()).then(|| text.to_owned())
    })
}
