use std::time::Instant;

use serde::Serialize;

use cambio_core::{Client, Currency, CurrencyKind};

use crate::cli::CurrenciesArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct CurrenciesResponseData {
    kind: CurrencyKind,
    count: usize,
    currencies: Vec<Currency>,
}

pub async fn run(args: &CurrenciesArgs, client: &Client) -> Result<CommandResult, CliError> {
    let kind = CurrencyKind::from(args.kind);

    let started = Instant::now();
    let listing = client.currencies(kind).await;
    let latency_ms = started.elapsed().as_millis() as u64;

    let data = serde_json::to_value(CurrenciesResponseData {
        kind,
        count: listing.items.len(),
        currencies: listing.items,
    })?;

    Ok(CommandResult::ok(data)
        .with_warnings(listing.warnings)
        .with_cache_hit(listing.cache_hit)
        .with_latency(latency_ms))
}
