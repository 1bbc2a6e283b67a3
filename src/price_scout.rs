use std::collections::HashMap;

use anyhow::Result;
use tracing::{debug, error, info, warn};

use crate::config::AppConfig;
use crate::extractors::{AmazonExtractor, WalmartExtractor};
use crate::input;
use crate::jitter::Jitter;
use crate::locale;
use crate::models::Retailer;
use crate::output::CsvSink;
use crate::session::PageSession;
use crate::traits::ProductExtractor;

/// Known-good ASIN used to prime the session when the input list has an
/// Amazon entry with an unusable SKU.
const FALLBACK_SETUP_SKU: &str = "B0CT4BB651";

pub struct PriceScout {
    config: AppConfig,
    extractors: HashMap<Retailer, Box<dyn ProductExtractor>>,
    jitter: Jitter,
}

impl PriceScout {
    pub fn new(config: AppConfig) -> Self {
        let mut extractors: HashMap<Retailer, Box<dyn ProductExtractor>> = HashMap::new();
        extractors.insert(Retailer::Amazon, Box::new(AmazonExtractor::new()));
        extractors.insert(Retailer::Walmart, Box::new(WalmartExtractor::new()));

        Self {
            config,
            extractors,
            jitter: Jitter::new(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let skus = input::load_skus(&self.config.input_path);
        if skus.is_empty() {
            error!(
                "No SKUs found in {}. Exiting.",
                self.config.input_path.display()
            );
            return Ok(());
        }

        let mut sink = CsvSink::create(&self.config.output_path)?;
        let session = PageSession::open(&self.config, &mut self.jitter).await?;

        // Amazon prices depend on the detected locale; prime the session
        // once before the per-item loop.
        let setup_sku = skus
            .iter()
            .find(|entry| Retailer::from_tag(&entry.kind) == Some(Retailer::Amazon))
            .map(|entry| {
                if entry.sku.trim().is_empty() {
                    FALLBACK_SETUP_SKU
                } else {
                    entry.sku.as_str()
                }
            });
        if let Some(setup_sku) = setup_sku {
            locale::set_amazon_location(&session, &self.config.target_zip, setup_sku).await;
        }

        for entry in &skus {
            info!("Processing item: {} - {}", entry.kind, entry.sku);

            if let Some(retailer) = Retailer::from_tag(&entry.kind) {
                let outcome = match self.extractors.get(&retailer) {
                    Some(extractor) => extractor.extract(&session, &entry.sku).await,
                    None => {
                        warn!("No extractor registered for {retailer}. Skipping {}.", entry.sku);
                        self.pause().await;
                        continue;
                    }
                };

                match outcome {
                    Ok(Some(record)) => {
                        debug!(
                            "Scraped {}: title={}, price={}, rating={}, reviews={}, description_len={}",
                            record.sku,
                            record.title,
                            record.price,
                            record.rating,
                            record.number_of_reviews,
                            record.description.len()
                        );
                        sink.append(&record)?;
                        info!("Saved data for {}", entry.sku);
                    }
                    Ok(None) => {
                        warn!("Skipping CSV write for {} (no data returned)", entry.sku);
                    }
                    Err(err) => {
                        error!(
                            "CRITICAL FAILURE on {}: {err:#}. Moving to next item.",
                            entry.sku
                        );
                    }
                }
            } else {
                warn!(
                    "Unrecognized retailer tag '{}' for SKU {}. Skipping.",
                    entry.kind, entry.sku
                );
            }

            self.pause().await;
        }

        info!("Job complete. Closing browser.");
        session.quit().await?;
        Ok(())
    }

    async fn pause(&mut self) {
        let pause = self
            .jitter
            .pause(self.config.min_pause_ms, self.config.max_pause_ms);
        tokio::time::sleep(pause).await;
    }
}
