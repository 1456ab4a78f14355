//! CLI argument definitions for cambio.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `currencies` | List supported currencies for a category |
//! | `convert` | Convert an amount between two currencies |
//! | `series` | Historical rate series for a currency pair |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat warnings as errors (exit code 5) |
//! | `--base-url` | env | Override the provider base URL |
//! | `--api-key` | env | Provider credential |
//! | `--cache-file` | in-memory | Catalog cache location |

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use cambio_core::CurrencyKind;

/// Currency conversion and historical rates from the terminal.
///
/// Talks to a single upstream rate provider, tolerating its inconsistent
/// payload shapes and degrading gracefully when endpoints fail.
#[derive(Debug, Parser)]
#[command(name = "cambio", version, about = "Currency conversion and historical rates")]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Override the provider base URL (default: CAMBIO_API_BASE).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Provider API key (default: CAMBIO_API_KEY).
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Path to the catalog cache file; the cache stays in memory when
    /// omitted.
    #[arg(long, global = true)]
    pub cache_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table format for terminal display.
    Table,
    /// Single JSON object output.
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List supported currencies for a category.
    Currencies(CurrenciesArgs),
    /// Convert an amount between two currencies.
    Convert(ConvertArgs),
    /// Historical rate series for a currency pair.
    Series(SeriesArgs),
}

#[derive(Debug, Args)]
pub struct CurrenciesArgs {
    /// Currency category to list.
    #[arg(long, value_enum, default_value_t = KindSelector::Fiat)]
    pub kind: KindSelector,
}

/// Currency catalog category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindSelector {
    Fiat,
    Crypto,
}

impl From<KindSelector> for CurrencyKind {
    fn from(value: KindSelector) -> Self {
        match value {
            KindSelector::Fiat => CurrencyKind::Fiat,
            KindSelector::Crypto => CurrencyKind::Crypto,
        }
    }
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Source currency code.
    pub from: String,
    /// Target currency code.
    pub to: String,
    /// Amount to convert; non-numeric input converts as 0.
    pub amount: String,
}

#[derive(Debug, Args)]
pub struct SeriesArgs {
    /// Source currency code.
    pub from: String,
    /// Target currency code.
    pub to: String,

    /// Window size in days ending today (the chart windows are 7, 30, and
    /// 90). Mutually exclusive with --start/--end.
    #[arg(long, conflicts_with_all = ["start", "end"])]
    pub days: Option<u16>,

    /// Range start (YYYY-MM-DD), inclusive.
    #[arg(long, requires = "end")]
    pub start: Option<String>,

    /// Range end (YYYY-MM-DD), inclusive.
    #[arg(long, requires = "start")]
    pub end: Option<String>,
}
