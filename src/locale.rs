//! One-time Amazon locale setup.
//!
//! Displayed prices and currency depend on the detected delivery location,
//! so the session is pinned to a reference US ZIP code once, before any
//! extraction. The original UI gives no completion signal after the ZIP is
//! submitted; instead of a blind sleep this polls the location indicator
//! for the new value with a capped wait.

use std::time::Duration;

use anyhow::{Result, bail};
use tracing::{error, info, warn};

use crate::selectors::amazon as sel;
use crate::session::PageSession;

const INPUT_WAIT: Duration = Duration::from_secs(5);
const SETTLE_MAX: Duration = Duration::from_secs(6);
const READY_WAIT: Duration = Duration::from_secs(10);

/// Force the session's delivery location to `zip`.
///
/// Never fails the run: any error is logged and swallowed, and extraction
/// proceeds against whatever locale the session ended up with.
pub async fn set_amazon_location(page: &PageSession, zip: &str, entry_sku: &str) {
    info!("Navigating to entry product ({entry_sku}) to set delivery location");
    if let Err(err) = try_set_location(page, zip, entry_sku).await {
        error!("Failed to set Amazon delivery location: {err:#}");
    }
}

async fn try_set_location(page: &PageSession, zip: &str, entry_sku: &str) -> Result<()> {
    let url = format!("https://www.amazon.com/dp/{entry_sku}?th=1");
    page.goto(&url).await?;

    dismiss_interstitial(page).await?;

    if let Some(current) = page.first_text(sel::LOCATION_WIDGET).await {
        if current.contains(zip) {
            info!("Delivery location is already {zip}");
            return Ok(());
        }
    }

    if !page.click_first(sel::LOCATION_WIDGET).await? {
        bail!("location widget not found");
    }
    page.wait_for(sel::LOCATION_INPUT, INPUT_WAIT).await?;
    page.fill(sel::LOCATION_INPUT, zip).await?;
    if !page.click_first(sel::LOCATION_APPLY).await? {
        bail!("ZIP apply control not found");
    }

    // The popover updates asynchronously after submit.
    if !page
        .wait_until_text_contains(sel::LOCATION_WIDGET, zip, SETTLE_MAX)
        .await
    {
        warn!("Location indicator did not show {zip} within {SETTLE_MAX:?}");
    }

    confirm_location_dialog(page).await?;

    page.wait_for_ready_state(READY_WAIT).await;
    page.wait_until_text_contains(sel::LOCATION_WIDGET, zip, SETTLE_MAX)
        .await;

    info!("Delivery location switched to {zip}");
    Ok(())
}

/// Amazon sometimes fronts product pages with a "Continue shopping"
/// interstitial; click through it when present.
async fn dismiss_interstitial(page: &PageSession) -> Result<()> {
    if page.click_button_labeled("Continue shopping").await? {
        warn!("Found interstitial. Clicking through...");
    }
    Ok(())
}

async fn confirm_location_dialog(page: &PageSession) -> Result<()> {
    for selector in sel::LOCATION_DONE {
        if page.click_first(selector).await? {
            info!("Clicking \"Done\"...");
            return Ok(());
        }
    }
    if page.click_button_labeled("Done").await? {
        info!("Clicking \"Done\"...");
        return Ok(());
    }
    if page.click_button_labeled("Continue").await? {
        info!("Clicking \"Continue\"...");
        return Ok(());
    }
    warn!("No confirmation button found after ZIP submit. Proceeding anyway.");
    Ok(())
}
