//! Publish command - push the seed catalog without verifying

use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::logging;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    info!("Prompt store host: {}", config.langfuse.host);

    let publisher = crate::create_publisher(&config);
    publisher.publish().await?;

    Ok(())
}
