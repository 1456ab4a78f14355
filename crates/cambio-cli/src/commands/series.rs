use std::time::Instant;

use serde::Serialize;

use cambio_core::{Client, CurrencyCode, Day, SeriesPoint};

use crate::cli::SeriesArgs;
use crate::error::CliError;

use super::CommandResult;

const DEFAULT_WINDOW_DAYS: u16 = 30;

#[derive(Debug, Serialize)]
struct SeriesResponseData {
    from: CurrencyCode,
    to: CurrencyCode,
    start: Day,
    end: Day,
    fallback: bool,
    points: Vec<SeriesPoint>,
}

pub async fn run(args: &SeriesArgs, client: &Client) -> Result<CommandResult, CliError> {
    let from = CurrencyCode::parse(&args.from)?;
    let to = CurrencyCode::parse(&args.to)?;
    let (start, end) = resolve_range(args)?;

    let started = Instant::now();
    let series = client.series(&from, &to, start, end).await?;
    let latency_ms = started.elapsed().as_millis() as u64;

    let data = serde_json::to_value(SeriesResponseData {
        from,
        to,
        start,
        end,
        fallback: series.fallback,
        points: series.points,
    })?;

    Ok(CommandResult::ok(data)
        .with_warnings(series.warnings)
        .with_latency(latency_ms))
}

fn resolve_range(args: &SeriesArgs) -> Result<(Day, Day), CliError> {
    if let (Some(start), Some(end)) = (&args.start, &args.end) {
        return Ok((Day::parse(start)?, Day::parse(end)?));
    }
    let days = args.days.unwrap_or(DEFAULT_WINDOW_DAYS);
    let end = Day::today_utc();
    Ok((end.minus_days(i64::from(days)), end))
}
