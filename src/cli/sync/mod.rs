//! Sync command - publish the seed catalog, then verify every write

use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Run the full publish-then-verify cycle
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    info!("Prompt store host: {}", config.langfuse.host);

    let publisher = crate::create_publisher(&config);
    publisher.run().await?;

    info!(
        "Prompts are visible at {}/prompts; restart the agent runtime to pick up the new version",
        config.langfuse.host
    );

    Ok(())
}
