//! Retailer-specific extractors and shared field helpers

use std::sync::LazyLock;

use regex::Regex;

pub mod amazon;
pub mod walmart;

pub use amazon::AmazonExtractor;
pub use walmart::WalmartExtractor;

const DESCRIPTION_MAX_CHARS: usize = 500;

static RATING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9.]+").unwrap());
static PRICE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$?[0-9][0-9,.]*").unwrap());

/// True when any marker appears in any of the given page texts.
pub(crate) fn matches_any(haystacks: &[&str], markers: &[String]) -> bool {
    markers
        .iter()
        .any(|marker| haystacks.iter().any(|text| text.contains(marker.as_str())))
}

/// Pull the leading numeric rating out of text like "4.5 out of 5 stars".
pub(crate) fn parse_rating(text: &str) -> Option<f64> {
    RATING_RE.find(text).and_then(|m| m.as_str().parse().ok())
}

/// First price-shaped token ("$1,299.00", "19.99") in the candidate text.
pub(crate) fn match_price(text: &str) -> Option<String> {
    PRICE_RE.find(text).map(|m| m.as_str().to_string())
}

/// Collapse whitespace runs to single spaces and cap the length.
pub(crate) fn normalize_description(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.chars().take(DESCRIPTION_MAX_CHARS).collect()
}
