//! Runtime configuration with fixed defaults and optional `.env` overrides

use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// JSON file holding the retailer-tagged SKU list.
    pub input_path: PathBuf,
    /// CSV results table, rewritten at the start of every run.
    pub output_path: PathBuf,
    /// Append-only mirror of ERROR-level log lines.
    pub error_log_path: PathBuf,
    /// WebDriver endpoint (chromedriver).
    pub webdriver_url: String,
    /// The browser runs in a visible window unless this is set.
    pub headless: bool,
    /// Reference US ZIP code forced onto the Amazon session before scraping.
    pub target_zip: String,
    /// Inter-item pause range in milliseconds.
    pub min_pause_ms: u64,
    pub max_pause_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("skus.json"),
            output_path: PathBuf::from("results.csv"),
            error_log_path: PathBuf::from("errors.log"),
            webdriver_url: "http://localhost:9515".to_string(),
            headless: false,
            target_zip: "10001".to_string(),
            min_pause_ms: 1000,
            max_pause_ms: 4000,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            input_path: env_var("PRICE_SCOUT_INPUT")
                .map_or(defaults.input_path, PathBuf::from),
            output_path: env_var("PRICE_SCOUT_OUTPUT")
                .map_or(defaults.output_path, PathBuf::from),
            error_log_path: env_var("PRICE_SCOUT_ERROR_LOG")
                .map_or(defaults.error_log_path, PathBuf::from),
            webdriver_url: env_var("PRICE_SCOUT_WEBDRIVER_URL")
                .unwrap_or(defaults.webdriver_url),
            headless: env_var("PRICE_SCOUT_HEADLESS")
                .map_or(defaults.headless, |v| is_truthy(&v)),
            target_zip: env_var("PRICE_SCOUT_ZIP").unwrap_or(defaults.target_zip),
            min_pause_ms: env_var("PRICE_SCOUT_MIN_PAUSE_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.min_pause_ms),
            max_pause_ms: env_var("PRICE_SCOUT_MAX_PAUSE_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_pause_ms),
        }
    }
}

fn env_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn is_truthy(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_contract() {
        let config = AppConfig::default();
        assert_eq!(config.input_path, PathBuf::from("skus.json"));
        assert_eq!(config.output_path, PathBuf::from("results.csv"));
        assert_eq!(config.error_log_path, PathBuf::from("errors.log"));
        assert_eq!(config.webdriver_url, "http://localhost:9515");
        assert!(!config.headless);
        assert_eq!(config.target_zip, "10001");
        assert_eq!(config.min_pause_ms, 1000);
        assert_eq!(config.max_pause_ms, 4000);
    }

    #[test]
    fn truthy_values() {
        assert!(is_truthy("1"));
        assert!(is_truthy("true"));
        assert!(is_truthy("TRUE"));
        assert!(!is_truthy("0"));
        assert!(!is_truthy("yes"));
    }
}
