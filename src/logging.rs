//! Tracing setup: console output plus an append-only error log file.
//!
//! Every log line goes to stdout with an ISO-8601 timestamp and level.
//! ERROR-level events are additionally mirrored to the error log file so
//! failures survive after the console scrollback is gone.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Install the global subscriber. Call once at startup, before any log line.
pub fn init(error_log_path: &Path) -> Result<()> {
    let error_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(error_log_path)
        .with_context(|| format!("opening error log {}", error_log_path.display()))?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stdout_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_filter(env_filter);

    let error_layer = fmt::layer()
        .with_writer(Arc::new(error_file))
        .with_ansi(false)
        .with_filter(LevelFilter::ERROR);

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(error_layer)
        .init();

    Ok(())
}
