//! Selector catalog: per-retailer CSS lookup tables.
//!
//! Retailer UIs run A/B layout tests, so no single selector is reliable.
//! Each field gets an ordered candidate list; extraction uses the first
//! candidate that yields a non-empty match. Update this file when a
//! retailer changes their markup, not the extraction logic.

pub mod amazon {
    pub const TITLE: &str = "span#productTitle";

    pub const PRICE: &[&str] = &[
        "#corePrice_feature_div .a-offscreen",
        "#corePriceDisplay_desktop_feature_div .a-price .a-offscreen",
        ".a-price .a-offscreen",
        "#price",
        ".a-color-price",
    ];

    pub const RATING: &[&str] = &[
        "i[data-hook=\"average-star-rating\"] span",
        "i.a-icon-star span",
        "#acrPopover span.a-icon-alt",
    ];

    pub const REVIEWS: &[&str] = &[
        "[data-hook=\"total-review-count\"]",
        "#acrCustomerReviewText",
    ];

    pub const DESCRIPTION_BULLETS: &str = "#feature-bullets li span.a-list-item";

    /// Book listings have no feature bullets; the description lives in an
    /// expander whose markup varies by edition.
    pub const DESCRIPTION_BOOK_CONTAINERS: &[&str] = &[
        "[data-feature-name=\"bookDescription\"] .a-expander-content",
        "#bookDescription_feature_div div[data-action=\"a-expander-toggle\"] + div",
        "#bookDescription_feature_div",
    ];

    pub const LOCATION_WIDGET: &str =
        "#nav-global-location-popover-link, #nav-global-location-slot";

    pub const LOCATION_INPUT: &str =
        "#GLUXZipUpdateInput, input[aria-label=\"or enter a US zip code\"]";

    pub const LOCATION_APPLY: &str =
        "#GLUXZipUpdate input[type=\"submit\"], #GLUXZipUpdate-announce";

    pub const LOCATION_DONE: &[&str] = &[
        "button[name=\"glowDoneButton\"]",
        "#GLUXConfirmClose",
        "[name=\"glowDoneButton\"]",
    ];

    pub const NOT_FOUND_MARKERS: &[&str] =
        &["Sorry! We couldn't find that page", "Page Not Found"];
}

pub mod walmart {
    pub const TITLE: &str = "h1";

    pub const PRICE: &[&str] = &[
        "span[itemprop=\"price\"]",
        "[data-testid=\"price-wrap\"] span",
        ".price-characteristic",
    ];

    pub const BLOCKED_MARKERS: &[&str] =
        &["Verify you are human", "Press & Hold", "Robot or human"];

    pub const NOT_FOUND_MARKERS: &[&str] =
        &["This page could not be found", "Page not found"];
}
