use serde_json::{json, Value};

use crate::cli::OutputFormat;
use crate::commands::CommandResult;
use crate::error::CliError;

/// Render a command result to stdout; warnings go to stderr in table mode
/// and into the envelope in JSON mode.
pub fn render(result: &CommandResult, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => render_json(result, pretty)?,
        OutputFormat::Table => render_table(result),
    }
    Ok(())
}

fn render_json(result: &CommandResult, pretty: bool) -> Result<(), CliError> {
    let envelope = json!({
        "data": result.data,
        "meta": {
            "cache_hit": result.cache_hit,
            "latency_ms": result.latency_ms,
            "warnings": result.warnings,
        },
    });
    let rendered = if pretty {
        serde_json::to_string_pretty(&envelope)?
    } else {
        serde_json::to_string(&envelope)?
    };
    println!("{rendered}");
    Ok(())
}

fn render_table(result: &CommandResult) {
    if let Some(currencies) = result.data.get("currencies").and_then(Value::as_array) {
        println!("{:<6} {:<36} SYMBOL", "CODE", "NAME");
        for currency in currencies {
            println!(
                "{:<6} {:<36} {}",
                text(currency, "code"),
                text(currency, "name"),
                text(currency, "symbol"),
            );
        }
    } else if let Some(points) = result.data.get("points").and_then(Value::as_array) {
        println!("{:<12} RATE", "DATE");
        for point in points {
            println!(
                "{:<12} {}",
                text(point, "date"),
                point.get("rate").and_then(Value::as_f64).unwrap_or(f64::NAN),
            );
        }
    } else if let Some(fields) = result.data.as_object() {
        for (name, value) in fields {
            println!("{name}: {value}");
        }
    }

    for warning in &result.warnings {
        eprintln!("warning: {warning}");
    }
}

fn text<'a>(record: &'a Value, field: &str) -> &'a str {
    record.get(field).and_then(Value::as_str).unwrap_or("")
}
