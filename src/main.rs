mod api;
mod config;
mod locale;
mod pet;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use config::ServiceConfig;

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("petbox=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ServiceConfig::from_env().context("Invalid petbox configuration")?;
    tracing::info!("[petbox] Starting with {:?}", config);

    api::serve(&config).await
}
