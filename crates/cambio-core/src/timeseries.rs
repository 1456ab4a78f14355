use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{CurrencyCode, Day};
use crate::error::ProviderError;
use crate::normalize::{finite_number, normalize_rate_map};
use crate::query::QueryParams;
use crate::transport::{Endpoint, Transport};

/// Payload locations probed for the date-keyed rate table, first present
/// wins.
const TABLE_POINTERS: [&str; 3] = ["/rates", "/data/rates", "/response/rates"];

/// One day of the historical rate series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: Day,
    pub rate: f64,
}

/// Chronological rate series plus any failures swallowed while building
/// it. Points are strictly ascending by date with no duplicates.
#[derive(Debug, Clone)]
pub struct RateSeries {
    pub points: Vec<SeriesPoint>,
    /// True when the batch endpoint yielded nothing and the series was
    /// assembled from per-day historical requests.
    pub fallback: bool,
    pub warnings: Vec<String>,
}

/// Historical rates for one currency pair over an inclusive date range.
///
/// One batch `timeseries` request is tried first. When it yields zero
/// points (unsupported range, empty payload, or request failure), every
/// day in the range is fetched individually from `historical`; a failing
/// or incomplete day is skipped, not retried, not substituted.
pub async fn series(
    transport: &Transport,
    from: &CurrencyCode,
    to: &CurrencyCode,
    start: Day,
    end: Day,
) -> RateSeries {
    let mut warnings = Vec::new();
    let points = batch_series(transport, from, to, start, end, &mut warnings).await;
    if !points.is_empty() {
        return RateSeries {
            points,
            fallback: false,
            warnings,
        };
    }

    warnings.push(String::from(
        "timeseries endpoint yielded no points; falling back to per-day historical requests",
    ));

    let mut points = Vec::new();
    for day in start.until_inclusive(end) {
        match day_rate(transport, from, to, day).await {
            Ok(Some(rate)) => points.push(SeriesPoint { date: day, rate }),
            Ok(None) => warnings.push(format!("{day}: rate table missing {from} or {to}; day skipped")),
            Err(error) => warnings.push(format!("{day}: {error}; day skipped")),
        }
    }
    points.sort_by_key(|point| point.date);

    RateSeries {
        points,
        fallback: true,
        warnings,
    }
}

async fn batch_series(
    transport: &Transport,
    from: &CurrencyCode,
    to: &CurrencyCode,
    start: Day,
    end: Day,
    warnings: &mut Vec<String>,
) -> Vec<SeriesPoint> {
    let params = QueryParams::new()
        .set("base", "USD")
        .set("start_date", start)
        .set("end_date", end)
        .set("symbols", format!("{from},{to}"));

    let payload = match transport.get_json(Endpoint::Timeseries, params).await {
        Ok(payload) => payload,
        Err(error) => {
            warnings.push(format!("timeseries request failed: {error}"));
            return Vec::new();
        }
    };

    let table = TABLE_POINTERS
        .iter()
        .find_map(|pointer| payload.pointer(pointer));
    let Some(Value::Object(table)) = table else {
        return Vec::new();
    };

    let mut entries: Vec<(&String, &Value)> = table.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let mut points = Vec::with_capacity(entries.len());
    for (date, day_rates) in entries {
        let Ok(day) = Day::parse(date) else {
            warnings.push(format!("timeseries key '{date}' is not a date; entry skipped"));
            continue;
        };
        let sides = side_rate(day_rates, from).zip(side_rate(day_rates, to));
        if let Some((from_rate, to_rate)) = sides {
            points.push(SeriesPoint {
                date: day,
                rate: to_rate / from_rate,
            });
        }
    }
    points
}

async fn day_rate(
    transport: &Transport,
    from: &CurrencyCode,
    to: &CurrencyCode,
    day: Day,
) -> Result<Option<f64>, ProviderError> {
    let params = QueryParams::new()
        .set("base", "USD")
        .set("date", day)
        .set("symbols", format!("{from},{to}"));
    let payload = transport.get_json(Endpoint::Historical, params).await?;
    let rates = normalize_rate_map(&payload);

    let from_rate = if from.is_usd() {
        Some(1.0)
    } else {
        rates.get(from.as_str()).copied()
    };
    let to_rate = if to.is_usd() {
        Some(1.0)
    } else {
        rates.get(to.as_str()).copied()
    };
    Ok(from_rate.zip(to_rate).map(|(f, t)| t / f))
}

/// Resolve one side's USD rate within a day's rate object: 1 for USD
/// itself, otherwise a finite numeric field lookup.
fn side_rate(day_rates: &Value, code: &CurrencyCode) -> Option<f64> {
    if code.is_usd() {
        return Some(1.0);
    }
    day_rates.get(code.as_str()).and_then(finite_number)
}
