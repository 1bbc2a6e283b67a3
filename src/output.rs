//! CSV results sink.
//!
//! The table is rewritten at the start of every run, then one row is
//! appended and flushed per successful extraction so partial progress
//! survives a crash later in the run.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::ProductRecord;

const HEADER: [&str; 7] = ["SKU", "SOURCE", "TITLE", "PRICE", "RATING", "REVIEWS", "URL"];

pub struct CsvSink {
    writer: csv::Writer<File>,
}

impl CsvSink {
    /// Create (or truncate) the results file and write the header row.
    pub fn create(path: &Path) -> Result<Self> {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("creating {}", path.display()))?;
        writer.write_record(HEADER)?;
        writer.flush()?;
        Ok(Self { writer })
    }

    /// Append one result row and flush it to disk immediately.
    pub fn append(&mut self, record: &ProductRecord) -> Result<()> {
        let rating = record.rating.to_string();
        self.writer.write_record([
            record.sku.as_str(),
            record.source.as_str(),
            record.title.as_str(),
            record.price.as_str(),
            rating.as_str(),
            record.number_of_reviews.as_str(),
            record.url.as_str(),
        ])?;
        self.writer.flush()?;
        Ok(())
    }
}
