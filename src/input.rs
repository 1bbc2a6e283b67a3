//! JSON SKU list loader.
//!
//! Accepts either a bare array of entries or an object wrapping the array
//! under a `skus` key. Any load failure yields an empty list and a single
//! ERROR log line; the caller decides whether an empty list ends the run.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::{error, info};

use crate::models::SkuEntry;

#[derive(Deserialize)]
#[serde(untagged)]
enum SkuFile {
    List(Vec<SkuEntry>),
    Wrapped { skus: Vec<SkuEntry> },
}

/// Read and parse the SKU list, logging on failure instead of propagating.
pub fn load_skus(path: &Path) -> Vec<SkuEntry> {
    match read_skus(path) {
        Ok(skus) => {
            info!("Loaded {} SKUs from {}", skus.len(), path.display());
            skus
        }
        Err(err) => {
            error!("Failed to load SKUs from {}: {err:#}", path.display());
            Vec::new()
        }
    }
}

fn read_skus(path: &Path) -> Result<Vec<SkuEntry>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    if raw.trim().is_empty() {
        bail!("file is empty");
    }
    parse_skus(&raw)
}

fn parse_skus(raw: &str) -> Result<Vec<SkuEntry>> {
    let parsed: SkuFile = serde_json::from_str(raw).context("invalid JSON shape")?;
    Ok(match parsed {
        SkuFile::List(skus) | SkuFile::Wrapped { skus } => skus,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn parses_bare_array_in_order() {
        let skus = parse_skus(
            r#"[{"Type":"Amazon","SKU":"X"},{"Type":"Walmart","SKU":"Y"}]"#,
        )
        .unwrap();
        assert_eq!(skus.len(), 2);
        assert_eq!(skus[0].sku, "X");
        assert_eq!(skus[0].kind, "Amazon");
        assert_eq!(skus[1].sku, "Y");
        assert_eq!(skus[1].kind, "Walmart");
    }

    #[test]
    fn parses_wrapped_object_shape() {
        let skus = parse_skus(
            r#"{"skus":[{"Type":"Amazon","SKU":"X"},{"Type":"Walmart","SKU":"Y"}]}"#,
        )
        .unwrap();
        assert_eq!(skus.len(), 2);
        assert_eq!(skus[0].sku, "X");
        assert_eq!(skus[1].sku, "Y");
    }

    #[test]
    fn rejects_empty_object() {
        assert!(parse_skus("{}").is_err());
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(parse_skus("not json at all").is_err());
    }

    #[test]
    fn missing_file_yields_empty_list() {
        let skus = load_skus(Path::new("definitely/not/here.json"));
        assert!(skus.is_empty());
    }

    #[test]
    fn empty_file_yields_empty_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "   \n").unwrap();
        assert!(load_skus(file.path()).is_empty());
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"Type":"Amazon","SKU":"B0CT4BB651"}}]"#).unwrap();
        let skus = load_skus(file.path());
        assert_eq!(skus.len(), 1);
        assert_eq!(skus[0].sku, "B0CT4BB651");
    }
}
