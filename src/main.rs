use anyhow::Result;
use tracing::{error, info};

mod config;
mod extractors;
mod input;
mod jitter;
mod locale;
mod logging;
mod models;
mod output;
mod price_scout;
mod retry;
mod selectors;
mod session;
mod traits;

use config::AppConfig;
use price_scout::PriceScout;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    logging::init(&config.error_log_path)?;

    info!("Starting price-scout");

    let mut scout = PriceScout::new(config);
    if let Err(err) = scout.run().await {
        error!("Scrape run aborted: {err:#}");
    }

    Ok(())
}
