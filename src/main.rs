use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use panel_nightly::clock::TokioClock;
use panel_nightly::config::{Config, DEFAULT_CONFIG_PATH};
use panel_nightly::orchestrator::NightlyRunner;
use panel_nightly::panel::PanelClient;

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::from_default_env()
        .add_directive("panel_nightly=info".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?);

    fmt().with_env_filter(env_filter).init();

    info!("Starting nightly panel maintenance");

    let config = Arc::new(Config::load(DEFAULT_CONFIG_PATH).await?);
    let client = PanelClient::new(config.clone());

    let runner = NightlyRunner::new(config, client, TokioClock);
    runner.run().await;

    Ok(())
}
