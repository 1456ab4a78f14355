mod convert;
mod currencies;
mod series;

use std::sync::Arc;

use serde_json::Value;

use cambio_core::{Client, JsonFileStore, ProviderConfig};

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Uniform command outcome rendered by the output module.
pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
    pub cache_hit: bool,
    pub latency_ms: u64,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            cache_hit: false,
            latency_ms: 0,
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }

    pub fn with_cache_hit(mut self, cache_hit: bool) -> Self {
        self.cache_hit = cache_hit;
        self
    }

    pub fn with_latency(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }
}

pub async fn run(cli: &Cli) -> Result<CommandResult, CliError> {
    let client = build_client(cli)?;
    match &cli.command {
        Command::Currencies(args) => currencies::run(args, &client).await,
        Command::Convert(args) => convert::run(args, &client).await,
        Command::Series(args) => series::run(args, &client).await,
    }
}

fn build_client(cli: &Cli) -> Result<Client, CliError> {
    let mut config = ProviderConfig::from_env();
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(api_key) = &cli.api_key {
        config.api_key = Some(api_key.clone());
    }

    let mut builder = Client::builder().with_config(config);
    if let Some(path) = &cli.cache_file {
        builder = builder.with_store(Arc::new(JsonFileStore::open(path)?));
    }
    Ok(builder.build())
}
