//! Output formatting and persistence for gain summaries.
//!
//! Supports pretty-printing, JSON serialization, and CSV append. Nothing
//! here is called until the pipeline has completed, so a failed run leaves
//! existing output files untouched.

use anyhow::Result;
use tracing::{debug, info};

use crate::pipeline::types::GainSummary;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;

/// Logs gain summaries using Rust's debug pretty-print format.
pub fn print_pretty(summaries: &[GainSummary]) {
    debug!("{:#?}", summaries);
}

/// Logs gain summaries as pretty-printed JSON.
pub fn print_json(summaries: &[GainSummary]) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(summaries)?);
    Ok(())
}

/// Appends gain summaries as rows to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_records(path: &str, summaries: &[GainSummary]) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, rows = summaries.len(), "Appending CSV records");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    for summary in summaries {
        writer.serialize(summary)?;
    }
    writer.flush()?;

    Ok(())
}
