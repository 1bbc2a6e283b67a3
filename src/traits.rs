//! Traits and interfaces for retailer-agnostic extraction

use anyhow::Result;
use async_trait::async_trait;

use crate::models::ProductRecord;
use crate::session::PageSession;

/// Configuration for a retailer extractor
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Display name for the retailer
    pub name: String,
    /// Product page URL pattern with a {sku} placeholder
    pub url_template: String,
    /// Text markers identifying a "page not found" result
    pub not_found_markers: Vec<String>,
    /// Text markers identifying a bot-challenge page
    pub blocked_markers: Vec<String>,
}

/// Trait for retailer-specific product extractors
#[async_trait]
pub trait ProductExtractor: Send + Sync {
    /// Get the configuration for this extractor
    fn config(&self) -> &ExtractorConfig;

    /// Build the product page URL for an identifier
    fn product_url(&self, sku: &str) -> String {
        let encoded = urlencoding::encode(sku);
        self.config().url_template.replace("{sku}", &encoded)
    }

    /// Scrape one product page.
    ///
    /// # Returns
    /// * `Ok(Some(record))` - the page held product content
    /// * `Ok(None)` - the page was confirmed not-found or blocked; skip it
    /// * `Err(_)` - navigation failed after exhausting retries
    async fn extract(&self, page: &PageSession, sku: &str) -> Result<Option<ProductRecord>>;
}
