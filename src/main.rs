//! Avocado Analytics Server
//!
//! Run with: cargo run
//!
//! # Configuration
//!
//! Settings come from a TOML file (`--config`, else the user config dir or
//! `./config.toml`) with environment overrides:
//! - `AVOCADO_HOST`: Host to bind to (default: 127.0.0.1)
//! - `AVOCADO_PORT`: Port to listen on (default: 8050)
//! - `AVOCADO_DATA_PATH`: Dataset CSV (default: data/avocado.csv)
//! - `AVOCADO_LOG_LEVEL`: Log level (default: info)
//! - `AVOCADO_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: Full filter directive, overrides the log level

use anyhow::Context;
use avocado_analytics::api::{serve, AppState};
use avocado_analytics::config::{
    generate_default_config, Config, ConfigSource, LoadedConfig, LoggingConfig,
};
use avocado_analytics::{dashboard, dataset};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Avocado Analytics: Understand Your Avocados!
#[derive(Parser)]
#[command(name = "avocado-analytics")]
#[command(about = "Interactive dashboard of avocado prices and sales", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dataset CSV file
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Print the default config file and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let LoadedConfig {
        mut config,
        source,
        skipped,
    } = match &cli.config {
        Some(path) => LoadedConfig {
            config: Config::load_with_env(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            source: ConfigSource::File(path.clone()),
            skipped: Vec::new(),
        },
        None => Config::load_default(),
    };
    if let Some(data) = cli.data {
        config.dataset.path = data;
    }
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    init_logging(&config.logging);

    tracing::info!("Starting Avocado Analytics v{}", env!("CARGO_PKG_VERSION"));
    for error in &skipped {
        tracing::warn!("Ignoring config file: {}", error);
    }
    tracing::info!("Config: {}", source);
    tracing::info!("Dataset: {:?}", config.dataset.path);

    let table = dataset::load(&config.dataset.path)
        .with_context(|| format!("Failed to load dataset {}", config.dataset.path.display()))?;
    let table = Arc::new(table);

    let layout = dashboard::layout::build(&table, &config.dashboard)
        .context("Failed to build dashboard layout")?;
    tracing::info!(
        regions = table.regions().len(),
        types = table.kinds().len(),
        "Dashboard layout ready"
    );

    let state = AppState::new(table, layout, config.server.clone());
    serve(state, &config.server).await?;

    tracing::info!("Avocado Analytics stopped");
    Ok(())
}

/// Initialize tracing from the logging config
fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "avocado_analytics={level},tower_http={level}",
            level = config.level
        ))
    });

    let (pretty, json) = if config.format.eq_ignore_ascii_case("json") {
        (None, Some(tracing_subscriber::fmt::layer().json()))
    } else {
        (Some(tracing_subscriber::fmt::layer()), None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(json)
        .init();
}
