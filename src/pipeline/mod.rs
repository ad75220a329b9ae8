//! Weight-gain aggregation pipeline.
//!
//! Canonicalizes record keys, groups weighings by animal, computes the daily
//! gain series per group, and collects one summary per qualifying animal.
//! A run is a pure function of its input: it either returns the full summary
//! sequence or an error, never partial results.

pub mod gain;
pub mod group;
pub mod types;
pub mod utility;

use anyhow::{Result, bail};
use tracing::debug;

use crate::record::{RawRecord, normalize_keys};
use self::gain::summarize_group;
use self::group::group_by_animal;
use self::types::GainSummary;

/// Runs the full pipeline over a batch of raw weighing records.
///
/// Summaries come out in first-occurrence order of each animal in the input.
/// Groups rejected along the way (too few valid weighings, no positive
/// elapsed-time pair) are silently excluded.
///
/// # Errors
///
/// Returns an error if the input is empty. Per-record and per-group
/// rejections are not errors.
pub fn run(records: &[RawRecord]) -> Result<Vec<GainSummary>> {
    if records.is_empty() {
        bail!("no weighing records to process");
    }

    let normalized: Vec<RawRecord> = records.iter().map(normalize_keys).collect();
    let groups = group_by_animal(&normalized);

    let mut summaries = Vec::new();
    for (animal, rows) in &groups {
        match summarize_group(animal, rows) {
            Some(summary) => summaries.push(summary),
            None => debug!(animal = %animal, rows = rows.len(), "Group rejected"),
        }
    }

    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn weighing(animal: &str, weight: &str, date: &str) -> RawRecord {
        [
            ("Animal".to_string(), json!(animal)),
            ("Peso".to_string(), json!(weight)),
            ("Data".to_string(), json!(date)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_empty_input_is_fatal() {
        assert!(run(&[]).is_err());
    }

    #[test]
    fn test_mixed_case_keys_resolve_to_same_field() {
        // One record says "Peso", the other "PESO"; both must feed the same
        // logical weight field.
        let mut second = weighing("BESS", "", "11/01/2024");
        second.remove("Peso");
        second.insert("PESO".to_string(), json!("120"));

        let records = vec![weighing("BESS", "100", "01/01/2024"), second];
        let summaries = run(&records).unwrap();

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].peso_final, 120.0);
    }

    #[test]
    fn test_output_follows_first_occurrence_order() {
        let records = vec![
            weighing("ZECA", "200", "01/01/2024"),
            weighing("ANA", "100", "01/01/2024"),
            weighing("ZECA", "210", "11/01/2024"),
            weighing("ANA", "110", "11/01/2024"),
        ];
        let summaries = run(&records).unwrap();
        let names: Vec<&str> = summaries.iter().map(|s| s.animal.as_str()).collect();
        assert_eq!(names, ["ZECA", "ANA"]);
    }

    #[test]
    fn test_rejected_groups_do_not_fail_the_run() {
        let records = vec![
            weighing("BESS", "100", "01/01/2024"),
            weighing("BESS", "120", "11/01/2024"),
            weighing("SOLITO", "300", "10/05/2024"),
        ];
        let summaries = run(&records).unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].animal, "BESS");
    }
}
