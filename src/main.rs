//! # Catalog Main Entry Point
//!
//! Loads layered configuration, applies command-line overrides and runs the
//! racing and sports catalog gateway.

use anyhow::Context;
use catalog::{config::ConfigLoader, server::run_server, telemetry};
use clap::Parser;

/// Racing and sports catalog gateway
#[derive(Debug, Parser)]
#[command(name = "catalog", version, about)]
struct Cli {
    /// Address the HTTP gateway binds to, e.g. `localhost:8000`
    #[arg(long)]
    api_endpoint: Option<String>,

    /// Racing store location, e.g. `sqlite://racing.db?mode=rwc`
    #[arg(long)]
    racing_database_url: Option<String>,

    /// Sports store location, e.g. `sqlite://sports.db?mode=rwc`
    #[arg(long)]
    sports_database_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration from layered env files and variables
    let mut config = ConfigLoader::new()
        .load()
        .context("failed to load configuration")?;

    if let Some(endpoint) = cli.api_endpoint {
        config.api_bind_addr = endpoint;
    }
    if let Some(url) = cli.racing_database_url {
        config.racing_database_url = url;
    }
    if let Some(url) = cli.sports_database_url {
        config.sports_database_url = url;
    }
    config.validate()?;

    telemetry::init_tracing(&config)?;

    tracing::info!(profile = %config.profile, "loaded configuration");
    if let Ok(redacted_json) = config.redacted_json() {
        tracing::debug!(config = %redacted_json, "effective configuration");
    }

    run_server(config).await
}
