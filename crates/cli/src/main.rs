use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use apifetch_core::{
    load_config, load_default_config, validate_config, Config, DataFetcher, HttpFetcher, Pipeline,
};

/// Environment variable naming an optional TOML config file
const CONFIG_ENV_VAR: &str = "APIFETCH_CONFIG";

#[tokio::main]
async fn main() {
    match run().await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            error!("Fatal error: {:#}", e);
            std::process::exit(1);
        }
    }
}

async fn run() -> Result<i32> {
    // Logs go to stderr so stdout only carries the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = load()?;
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Endpoint: {}", config.endpoint.url);

    let fetcher: Arc<dyn DataFetcher> = Arc::new(
        HttpFetcher::new(&config.endpoint).context("Failed to create HTTP fetcher")?,
    );

    let pipeline = Pipeline::new(config.endpoint.url.clone(), fetcher);
    let outcome = pipeline.run().await;
    info!("Pipeline finished: {:?}", outcome);

    // A caught pipeline failure still exits 0 unless fail_on_error is set
    if outcome.is_failure() && config.fail_on_error {
        return Ok(1);
    }
    Ok(0)
}

fn load() -> Result<Config> {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => {
            let path = PathBuf::from(path);
            debug!("Loading configuration from {:?}", path);
            load_config(&path).with_context(|| format!("Failed to load config from {:?}", path))
        }
        None => load_default_config().context("Failed to load default configuration"),
    }
}
