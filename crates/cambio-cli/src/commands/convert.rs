use std::time::Instant;

use serde::Serialize;

use cambio_core::{Client, CurrencyCode};

use crate::cli::ConvertArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct ConvertResponseData {
    from: CurrencyCode,
    to: CurrencyCode,
    amount: f64,
    result: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    rate: Option<f64>,
    fallback: bool,
}

pub async fn run(args: &ConvertArgs, client: &Client) -> Result<CommandResult, CliError> {
    let from = CurrencyCode::parse(&args.from)?;
    let to = CurrencyCode::parse(&args.to)?;
    // Mirrors the input box: anything non-numeric converts as zero.
    let amount: f64 = args.amount.trim().parse().unwrap_or(0.0);

    let started = Instant::now();
    let conversion = client.convert(&from, &to, amount).await?;
    let latency_ms = started.elapsed().as_millis() as u64;

    let fallback = conversion.is_fallback();
    let data = serde_json::to_value(ConvertResponseData {
        from,
        to,
        amount,
        result: conversion.result,
        rate: conversion.rate,
        fallback,
    })?;

    Ok(CommandResult::ok(data)
        .with_warnings(conversion.meta.warnings)
        .with_latency(latency_ms))
}
