//! Page session adapter over a WebDriver browser.
//!
//! One [`PageSession`] lives for the whole run so cookies and the forced
//! delivery location survive across product pages. The probing methods
//! (`first_text`, `first_visible_text`, `all_texts`, `is_visible`) never
//! error on missing elements; extraction treats absence as a miss and
//! falls through to the next selector candidate.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use thirtyfour::prelude::*;
use tracing::debug;

use crate::config::AppConfig;
use crate::jitter::Jitter;
use crate::retry;

/// Small fixed pool; one entry is picked at random per run.
pub const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
];

const PAGE_LOAD_TIMEOUT: Duration = Duration::from_secs(30);
const NAV_ATTEMPTS: u32 = 3;
const NAV_RETRY_DELAY: Duration = Duration::from_secs(5);
const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub struct PageSession {
    driver: WebDriver,
}

impl PageSession {
    /// Launch a browser session against the configured WebDriver endpoint.
    pub async fn open(config: &AppConfig, jitter: &mut Jitter) -> Result<Self> {
        let user_agent = jitter
            .choose(USER_AGENTS)
            .copied()
            .unwrap_or(USER_AGENTS[0]);
        debug!("Launching browser with user agent: {user_agent}");

        let mut caps = DesiredCapabilities::chrome();
        caps.add_arg(&format!("--user-agent={user_agent}"))?;
        caps.add_arg("--window-size=1280,720")?;
        caps.add_arg("--disable-blink-features=AutomationControlled")?;
        if config.headless {
            caps.add_arg("--headless=new")?;
        }

        let driver = WebDriver::new(&config.webdriver_url, caps)
            .await
            .with_context(|| format!("connecting to WebDriver at {}", config.webdriver_url))?;
        driver.set_page_load_timeout(PAGE_LOAD_TIMEOUT).await?;

        Ok(Self { driver })
    }

    pub async fn goto(&self, url: &str) -> Result<()> {
        self.driver
            .goto(url)
            .await
            .with_context(|| format!("navigating to {url}"))
    }

    /// Navigate with the fixed 3-attempt retry loop. The error from the
    /// final attempt propagates to the caller.
    pub async fn goto_with_retry(&self, url: &str) -> Result<()> {
        retry::fixed(NAV_ATTEMPTS, NAV_RETRY_DELAY, || self.goto(url)).await
    }

    pub async fn title(&self) -> Result<String> {
        self.driver.title().await.context("reading page title")
    }

    pub async fn body_text(&self) -> Result<String> {
        let body = self.driver.find(By::Css("body")).await?;
        body.text().await.context("reading body text")
    }

    /// First non-empty trimmed text among the selector's matches.
    pub async fn first_text(&self, selector: &str) -> Option<String> {
        let elements = self.driver.find_all(By::Css(selector)).await.ok()?;
        for element in elements {
            if let Ok(text) = element.text().await {
                let text = text.trim();
                if !text.is_empty() {
                    return Some(text.to_string());
                }
            }
        }
        None
    }

    /// Like [`first_text`](Self::first_text) but only considers elements
    /// currently displayed.
    pub async fn first_visible_text(&self, selector: &str) -> Option<String> {
        let elements = self.driver.find_all(By::Css(selector)).await.ok()?;
        for element in elements {
            if !element.is_displayed().await.unwrap_or(false) {
                continue;
            }
            if let Ok(text) = element.text().await {
                let text = text.trim();
                if !text.is_empty() {
                    return Some(text.to_string());
                }
            }
        }
        None
    }

    /// Trimmed text of every match, empty entries dropped.
    pub async fn all_texts(&self, selector: &str) -> Vec<String> {
        let Ok(elements) = self.driver.find_all(By::Css(selector)).await else {
            return Vec::new();
        };
        let mut texts = Vec::with_capacity(elements.len());
        for element in elements {
            if let Ok(text) = element.text().await {
                let text = text.trim();
                if !text.is_empty() {
                    texts.push(text.to_string());
                }
            }
        }
        texts
    }

    pub async fn is_visible(&self, selector: &str) -> bool {
        let Ok(elements) = self.driver.find_all(By::Css(selector)).await else {
            return false;
        };
        for element in elements {
            if element.is_displayed().await.unwrap_or(false) {
                return true;
            }
        }
        false
    }

    /// Click the first displayed match. Returns `false` when nothing
    /// matched, so callers can fall through to the next candidate.
    pub async fn click_first(&self, selector: &str) -> Result<bool> {
        let elements = self.driver.find_all(By::Css(selector)).await?;
        for element in elements {
            if element.is_displayed().await.unwrap_or(false) {
                element.click().await?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Click a button (or submit input) by its visible label. CSS cannot
    /// match on text, so this goes through XPath.
    pub async fn click_button_labeled(&self, label: &str) -> Result<bool> {
        let xpath = format!(
            "//button[normalize-space(.)='{label}'] | \
             //input[(@type='submit' or @type='button') and @value='{label}']"
        );
        let elements = self.driver.find_all(By::XPath(xpath.as_str())).await?;
        for element in elements {
            if element.is_displayed().await.unwrap_or(false) {
                element.click().await?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Clear and type into the first match. Callers wait for the field
    /// first; a missing field is an error here.
    pub async fn fill(&self, selector: &str, text: &str) -> Result<()> {
        let element = self.driver.find(By::Css(selector)).await?;
        element.clear().await?;
        element.send_keys(text).await?;
        Ok(())
    }

    /// Bounded wait for an element to appear.
    pub async fn wait_for(&self, selector: &str, timeout: Duration) -> Result<WebElement> {
        let element = self
            .driver
            .query(By::Css(selector))
            .wait(timeout, POLL_INTERVAL)
            .first()
            .await
            .with_context(|| format!("waiting {timeout:?} for '{selector}'"))?;
        Ok(element)
    }

    /// Poll until the selector's text contains `needle`, up to `max`.
    /// Returns whether the condition was observed before the deadline.
    pub async fn wait_until_text_contains(
        &self,
        selector: &str,
        needle: &str,
        max: Duration,
    ) -> bool {
        let deadline = Instant::now() + max;
        loop {
            if let Some(text) = self.first_text(selector).await {
                if text.contains(needle) {
                    return true;
                }
            }
            if Instant::now() >= deadline {
                return false;
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Poll `document.readyState` until the page settles, up to `max`.
    pub async fn wait_for_ready_state(&self, max: Duration) -> bool {
        let deadline = Instant::now() + max;
        loop {
            if let Ok(ret) = self.driver.execute("return document.readyState;", vec![]).await {
                if let Ok(state) = ret.convert::<String>() {
                    if state == "complete" || state == "interactive" {
                        return true;
                    }
                }
            }
            if Instant::now() >= deadline {
                return false;
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    pub async fn quit(self) -> Result<()> {
        self.driver.quit().await.context("closing browser session")
    }
}
