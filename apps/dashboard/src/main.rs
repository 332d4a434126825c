//! Vitrine dashboard entry point.

use tracing::info;
use vitrine_dashboard::{init_tracing, run, DashboardConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting Vitrine dashboard...");

    let config = DashboardConfig::load(None)?;
    info!(
        url = %config.source.url,
        timeout_secs = config.source.timeout_secs,
        addr = %config.server.bind_address(),
        "Configuration loaded"
    );

    run(config).await?;
    Ok(())
}
