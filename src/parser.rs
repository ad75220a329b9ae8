//! CSV decoder for weighing exports.
//!
//! This is the decoding collaborator: container format in, loosely-typed
//! records out. The pipeline itself never sees CSV.

use anyhow::Result;
use serde_json::Value;

use crate::record::RawRecord;

/// Decodes a CSV export into a sequence of [`RawRecord`]s.
///
/// Every cell comes out as a JSON string; typed interpretation (numbers,
/// dates) is the field resolver's job, not the decoder's. Header spellings
/// are passed through untouched — the pipeline canonicalizes them.
///
/// # Errors
///
/// Returns an error if the bytes are not well-formed CSV.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<RawRecord>> {
    let mut reader = csv::Reader::from_reader(bytes);
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let record: RawRecord = headers
            .iter()
            .zip(row.iter())
            .map(|(key, cell)| (key.to_string(), Value::String(cell.to_string())))
            .collect();
        records.push(record);
    }

    Ok(records)
}
