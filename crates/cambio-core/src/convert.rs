use std::collections::HashMap;

use serde_json::Value;

use crate::domain::CurrencyCode;
use crate::error::ProviderError;
use crate::normalize::{finite_number, normalize_rate_map};
use crate::query::QueryParams;
use crate::transport::{Endpoint, Transport};

/// Payload locations probed for the direct conversion result, first
/// present wins.
const RESULT_POINTERS: [&str; 5] = [
    "/result",
    "/response/value",
    "/response/result",
    "/data/result",
    "/value",
];

/// How a conversion result was produced.
#[derive(Debug, Clone)]
pub enum ConversionSource {
    /// Direct provider conversion; carries the raw payload for diagnostics.
    Direct { payload: Value },
    /// Cross-rate computed from the latest-rates endpoint over a pivot.
    CrossRate {
        base: String,
        rates: HashMap<String, f64>,
    },
}

/// Diagnostic metadata attached to a conversion.
#[derive(Debug, Clone)]
pub struct ConversionMeta {
    pub source: ConversionSource,
    /// Failures swallowed on the way to this result.
    pub warnings: Vec<String>,
}

/// Result of one conversion request.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub result: f64,
    /// Per-unit rate; absent when the direct path converted a zero amount.
    pub rate: Option<f64>,
    pub meta: ConversionMeta,
}

impl Conversion {
    pub fn is_fallback(&self) -> bool {
        matches!(self.meta.source, ConversionSource::CrossRate { .. })
    }
}

/// Convert `amount` from one currency to another.
///
/// The direct `convert` endpoint is tried first; a transport failure or a
/// payload without a finite result falls back unconditionally to a USD
/// cross-rate over the `latest` endpoint. Only the fallback path can fail:
/// with [`ProviderError::FallbackUnavailable`] when a required USD rate is
/// missing, or with a transport error from the fallback fetch itself.
pub async fn convert(
    transport: &Transport,
    from: &CurrencyCode,
    to: &CurrencyCode,
    amount: f64,
) -> Result<Conversion, ProviderError> {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let mut warnings = Vec::new();

    let params = QueryParams::new()
        .set("from", from)
        .set("to", to)
        .set("amount", amount);
    match transport.get_json(Endpoint::Convert, params).await {
        Ok(payload) => {
            if let Some(result) = direct_result(&payload) {
                let rate = (amount != 0.0).then(|| result / amount);
                return Ok(Conversion {
                    result,
                    rate,
                    meta: ConversionMeta {
                        source: ConversionSource::Direct { payload },
                        warnings,
                    },
                });
            }
            warnings.push(String::from(
                "convert endpoint returned no numeric result; computing USD cross-rate",
            ));
        }
        Err(error) => {
            warnings.push(format!(
                "convert endpoint failed: {error}; computing USD cross-rate"
            ));
        }
    }

    cross_rate(transport, from, to, amount, warnings).await
}

fn direct_result(payload: &Value) -> Option<f64> {
    RESULT_POINTERS
        .iter()
        .find_map(|pointer| payload.pointer(pointer).filter(|v| !v.is_null()))
        .and_then(finite_number)
}

async fn cross_rate(
    transport: &Transport,
    from: &CurrencyCode,
    to: &CurrencyCode,
    amount: f64,
    warnings: Vec<String>,
) -> Result<Conversion, ProviderError> {
    // USD sides resolve to 1 trivially, so only the other sides are fetched.
    let mut symbols: Vec<&str> = Vec::with_capacity(2);
    if !from.is_usd() {
        symbols.push(from.as_str());
    }
    if !to.is_usd() && to != from {
        symbols.push(to.as_str());
    }

    let params = QueryParams::new().set_opt(
        "symbols",
        (!symbols.is_empty()).then(|| symbols.join(",")),
    );
    let payload = transport.get_json(Endpoint::Latest, params).await?;
    let rates = normalize_rate_map(&payload);

    let from_rate = usd_rate(&rates, from)?;
    let to_rate = usd_rate(&rates, to)?;
    let per_unit = to_rate / from_rate;

    Ok(Conversion {
        result: amount * per_unit,
        rate: Some(per_unit),
        meta: ConversionMeta {
            source: ConversionSource::CrossRate {
                base: String::from("USD"),
                rates,
            },
            warnings,
        },
    })
}

fn usd_rate(rates: &HashMap<String, f64>, code: &CurrencyCode) -> Result<f64, ProviderError> {
    if code.is_usd() {
        return Ok(1.0);
    }
    rates
        .get(code.as_str())
        .copied()
        .ok_or_else(|| ProviderError::fallback_unavailable(code.as_str()))
}
