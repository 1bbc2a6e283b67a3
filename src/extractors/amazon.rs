//! Amazon.com product page extractor

use anyhow::Result;
use async_trait::async_trait;
use tracing::{info, warn};

use crate::models::{ProductRecord, Retailer};
use crate::selectors::amazon as sel;
use crate::session::PageSession;
use crate::traits::{ExtractorConfig, ProductExtractor};

use super::{matches_any, normalize_description, parse_rating};

/// How many feature bullets go into the description field.
const DESCRIPTION_BULLET_COUNT: usize = 3;

pub struct AmazonExtractor {
    config: ExtractorConfig,
}

impl AmazonExtractor {
    pub fn new() -> Self {
        let config = ExtractorConfig {
            name: "Amazon".to_string(),
            url_template: "https://www.amazon.com/dp/{sku}?th=1".to_string(),
            not_found_markers: sel::NOT_FOUND_MARKERS
                .iter()
                .map(ToString::to_string)
                .collect(),
            // Amazon serves interstitials rather than a challenge page; the
            // locale step clicks through those before extraction starts.
            blocked_markers: Vec::new(),
        };
        Self { config }
    }

    async fn extract_description(&self, page: &PageSession) -> String {
        let bullets = page.all_texts(sel::DESCRIPTION_BULLETS).await;
        let raw = if bullets.is_empty() {
            let mut text = String::new();
            for selector in sel::DESCRIPTION_BOOK_CONTAINERS {
                if let Some(found) = page.first_visible_text(selector).await {
                    text = found;
                    break;
                }
            }
            text
        } else {
            bullets
                .iter()
                .take(DESCRIPTION_BULLET_COUNT)
                .cloned()
                .collect::<Vec<_>>()
                .join(" | ")
        };
        normalize_description(&raw)
    }
}

#[async_trait]
impl ProductExtractor for AmazonExtractor {
    fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    async fn extract(&self, page: &PageSession, sku: &str) -> Result<Option<ProductRecord>> {
        let url = self.product_url(sku);
        info!("Navigating to {} SKU: {sku}", self.config.name);

        page.goto_with_retry(&url).await?;

        let page_title = page.title().await.unwrap_or_default();
        let body_text = page.body_text().await.unwrap_or_default();
        if matches_any(&[&page_title, &body_text], &self.config.not_found_markers) {
            warn!("SKU {sku} does not exist on Amazon. Skipping.");
            return Ok(None);
        }

        let title = page
            .first_text(sel::TITLE)
            .await
            .unwrap_or_else(|| "N/A".to_string());

        let mut price = "N/A".to_string();
        for selector in sel::PRICE {
            if let Some(text) = page.first_visible_text(selector).await {
                price = text;
                break;
            }
        }

        let mut rating = 0.0;
        for selector in sel::RATING {
            if let Some(text) = page.first_text(selector).await {
                if let Some(parsed) = parse_rating(&text) {
                    rating = parsed;
                    break;
                }
            }
        }

        let mut reviews = "0".to_string();
        for selector in sel::REVIEWS {
            if let Some(text) = page.first_text(selector).await {
                reviews = text;
                break;
            }
        }

        let description = self.extract_description(page).await;

        let record = ProductRecord {
            sku: sku.to_string(),
            source: Retailer::Amazon,
            title,
            price,
            description,
            rating,
            number_of_reviews: reviews,
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
    fn product_url_substitutes_the_asin() {
        let extractor = AmazonExtractor::new();
        assert_eq!(
            extractor.product_url("B0CT4BB651"),
            "https://www.amazon.com/dp/B0CT4BB651?th=1"
        );
    }

    #[test]
    fn product_url_percent_encodes() {
        let extractor = AmazonExtractor::new();
        assert_eq!(
            extractor.product_url("a b/c"),
            "https://www.amazon.com/dp/a%20b%2Fc?th=1"
        );
    }

    #[test]
    fn not_found_markers_match_both_page_shapes() {
        let extractor = AmazonExtractor::new();
        let markers = &extractor.config().not_found_markers;
        assert!(matches_any(
            &["Amazon.com Page Not Found", ""],
            markers
        ));
        assert!(matches_any(
            &["", "Sorry! We couldn't find that page"],
            markers
        ));
        assert!(!matches_any(&["Some Product", "Great deals"], markers));
    }
}
