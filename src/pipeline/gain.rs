//! Per-animal daily gain computation.

use chrono::NaiveDate;

use crate::dates::normalize_date;
use crate::record::{
    AGE_ALIASES, DATE_ALIASES, LOCATION_ALIASES, NOT_AVAILABLE, RawRecord, SEX_ALIASES,
    WEIGHT_ALIASES, resolve, resolve_f64, resolve_str,
};
use super::types::GainSummary;
use super::utility::{mean, round4};

/// One weighing that survived date and weight validation.
struct Weighing<'a> {
    date: NaiveDate,
    weight: f64,
    record: &'a RawRecord,
}

/// Computes the gain summary for one animal's weighings, or `None` when the
/// group does not qualify.
///
/// A group is rejected when it has fewer than 2 records, fewer than 2 records
/// with a parseable date and numeric weight, or no consecutive pair with
/// positive elapsed time. Rejection is silent: it is the expected fate of
/// incomplete data, not an error.
pub fn summarize_group(animal: &str, records: &[RawRecord]) -> Option<GainSummary> {
    if records.len() < 2 {
        return None;
    }

    let mut valid: Vec<Weighing> = records
        .iter()
        .filter_map(|record| {
            let date = normalize_date(resolve(record, DATE_ALIASES)?)?;
            let weight = resolve_f64(record, WEIGHT_ALIASES).filter(|w| w.is_finite())?;
            Some(Weighing {
                date,
                weight,
                record,
            })
        })
        .collect();

    if valid.len() < 2 {
        return None;
    }

    // Stable: same-day weighings keep their input order.
    valid.sort_by_key(|w| w.date);

    let mut rates = Vec::new();
    for pair in valid.windows(2) {
        let elapsed_days = (pair[1].date - pair[0].date).num_days();
        if elapsed_days > 0 {
            rates.push((pair[1].weight - pair[0].weight) / elapsed_days as f64);
        }
        // Non-positive elapsed time: pair skipped, series just gets shorter.
    }

    if rates.is_empty() {
        return None;
    }

    let first = valid.first()?;
    let last = valid.last()?;

    Some(GainSummary {
        animal: animal.to_string(),
        local: resolve_str(last.record, LOCATION_ALIASES, NOT_AVAILABLE),
        sexo: resolve_str(last.record, SEX_ALIASES, NOT_AVAILABLE)
            .trim()
            .to_uppercase(),
        idade_meses: resolve_f64(last.record, AGE_ALIASES).unwrap_or(0.0),
        peso_inicial: first.weight,
        peso_final: last.weight,
        ganho_total: last.weight - first.weight,
        ganho_diario: round4(mean(&rates)),
        periodo_dias: (last.date - first.date).num_days(),
        total_pesagens: valid.len(),
    })
}
