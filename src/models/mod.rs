//! Data models for SKU input entries and scraped product records

use std::fmt;

use serde::Deserialize;

/// Retail sites the scraper knows how to extract from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Retailer {
    Amazon,
    Walmart,
}

impl Retailer {
    /// Resolve a retailer from the `Type` tag used in the input file.
    ///
    /// Returns `None` for tags the scraper does not recognize so a single
    /// bad entry skips one item instead of failing the whole list.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Amazon" => Some(Self::Amazon),
            "Walmart" => Some(Self::Walmart),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Amazon => "Amazon",
            Self::Walmart => "Walmart",
        }
    }
}

impl fmt::Display for Retailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One retailer-tagged product identifier from the input file.
#[derive(Debug, Clone, Deserialize)]
pub struct SkuEntry {
    /// Raw retailer tag, kept as a string so unknown tags survive parsing.
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "SKU")]
    pub sku: String,
}

/// Normalized output row for one successfully scraped product.
#[derive(Debug, Clone)]
pub struct ProductRecord {
    pub sku: String,
    pub source: Retailer,
    pub title: String,
    pub price: String,
    pub description: String,
    pub rating: f64,
    pub number_of_reviews: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_resolve() {
        assert_eq!(Retailer::from_tag("Amazon"), Some(Retailer::Amazon));
        assert_eq!(Retailer::from_tag("Walmart"), Some(Retailer::Walmart));
    }

    #[test]
    fn unknown_tags_are_none() {
        assert_eq!(Retailer::from_tag("Target"), None);
        assert_eq!(Retailer::from_tag("amazon"), None);
        assert_eq!(Retailer::from_tag(""), None);
    }

    #[test]
    fn display_matches_input_tags() {
        assert_eq!(Retailer::Amazon.to_string(), "Amazon");
        assert_eq!(Retailer::Walmart.to_string(), "Walmart");
    }

    #[test]
    fn sku_entry_uses_original_field_names() {
        let entry: SkuEntry =
            serde_json::from_str(r#"{"Type":"Amazon","SKU":"B0CT4BB651"}"#).unwrap();
        assert_eq!(entry.kind, "Amazon");
        assert_eq!(entry.sku, "B0CT4BB651");
    }
}
