//! Walmart.com product page extractor.
//!
//! Walmart serves a bot-challenge page instead of product content when it
//! dislikes the session, so classification checks for the challenge before
//! the not-found markers. Rating and description are not exposed on the
//! page variant this extractor targets and always take their defaults.

use anyhow::Result;
use async_trait::async_trait;
use tracing::{info, warn};

use crate::models::{ProductRecord, Retailer};
use crate::selectors::walmart as sel;
use crate::session::PageSession;
use crate::traits::{ExtractorConfig, ProductExtractor};

use super::{match_price, matches_any};

pub struct WalmartExtractor {
    config: ExtractorConfig,
}

impl WalmartExtractor {
    pub fn new() -> Self {
        let config = ExtractorConfig {
            name: "Walmart".to_string(),
            url_template: "https://www.walmart.com/ip/{sku}".to_string(),
            not_found_markers: sel::NOT_FOUND_MARKERS
                .iter()
                .map(ToString::to_string)
                .collect(),
            blocked_markers: sel::BLOCKED_MARKERS
                .iter()
                .map(ToString::to_string)
                .collect(),
        };
        Self { config }
    }
}

#[async_trait]
impl ProductExtractor for WalmartExtractor {
    fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    async fn extract(&self, page: &PageSession, sku: &str) -> Result<Option<ProductRecord>> {
        let url = self.product_url(sku);
        info!("Navigating to {} SKU: {sku}", self.config.name);

        page.goto_with_retry(&url).await?;

        let page_title = page.title().await.unwrap_or_default();
        let body_text = page.body_text().await.unwrap_or_default();
        let page_texts = [page_title.as_str(), body_text.as_str()];

        if matches_any(&page_texts, &self.config.blocked_markers) {
            warn!("Walmart bot challenge detected for SKU {sku}. Skipping.");
            return Ok(None);
        }
        if matches_any(&page_texts, &self.config.not_found_markers) {
            warn!("SKU {sku} does not exist on Walmart (404). Skipping.");
            return Ok(None);
        }

        let title = page
            .first_text(sel::TITLE)
            .await
            .unwrap_or_else(|| "N/A".to_string());

        let mut price = "N/A".to_string();
        for selector in sel::PRICE {
            if let Some(text) = page.first_visible_text(selector).await {
                if let Some(matched) = match_price(&text) {
                    price = matched;
                    break;
                }
            }
        }

        let record = ProductRecord {
            sku: sku.to_string(),
            source: Retailer::Walmart,
            title,
            price,
            description: String::new(),
            rating: 0.0,
            number_of_reviews: "0".to_string(),
            url,
        };

        info!("Successfully scraped {} data for {sku}", self.config.name);
        Ok(Some(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_url_substitutes_the_item_id() {
        let extractor = WalmartExtractor::new();
        assert_eq!(
            extractor.product_url("5326288985"),
            "https://www.walmart.com/ip/5326288985"
        );
    }

    #[test]
    fn challenge_pages_are_recognized() {
        let extractor = WalmartExtractor::new();
        let markers = &extractor.config().blocked_markers;
        assert!(matches_any(&["Robot or human?", ""], markers));
        assert!(matches_any(&["", "Press & Hold to confirm"], markers));
        assert!(!matches_any(&["Great Value Milk", "Add to cart"], markers));
    }

    #[test]
    fn not_found_is_distinct_from_blocked() {
        let extractor = WalmartExtractor::new();
        let texts = ["Page not found", "This page could not be found"];
        assert!(!matches_any(&texts, &extractor.config().blocked_markers));
        assert!(matches_any(&texts, &extractor.config().not_found_markers));
    }
}
