//! Loosely-typed weighing records and logical field resolution.
//!
//! Input columns vary in name and casing between spreadsheets, so every
//! logical field is looked up through a priority-ordered alias table after
//! all keys have been canonicalized to trimmed uppercase.

use serde_json::Value;
use std::collections::HashMap;

/// One weighing event as produced by a decoding collaborator: column name to
/// scalar value (string, number, or null).
pub type RawRecord = HashMap<String, Value>;

/// Accepted spellings per logical field, highest priority first.
/// All entries are trimmed-uppercase, matching the output of [`normalize_keys`].
pub static ANIMAL_ALIASES: &[&str] = &["ANIMAL", "NOME", "BRINCO", "IDENTIFICACAO", "ID"];
pub static WEIGHT_ALIASES: &[&str] = &["PESO", "PESO_KG", "PESO (KG)", "PESAGEM", "WEIGHT"];
pub static DATE_ALIASES: &[&str] = &["DATA", "DATA_PESAGEM", "DATA PESAGEM", "DT_PESAGEM", "DATE"];
pub static SEX_ALIASES: &[&str] = &["SEXO", "SEX"];
pub static LOCATION_ALIASES: &[&str] = &["LOCAL", "FAZENDA", "PASTO", "LOCATION"];
pub static AGE_ALIASES: &[&str] = &["IDADE", "IDADE_MESES", "IDADE (MESES)", "MESES", "AGE"];

/// Default for missing `sex` and `location` fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// Canonicalizes every key of a record to its trimmed uppercase form.
///
/// If two keys collapse to the same canonical form, the value already present
/// is kept.
pub fn normalize_keys(record: &RawRecord) -> RawRecord {
    let mut out = RawRecord::with_capacity(record.len());
    for (key, value) in record {
        out.entry(key.trim().to_uppercase())
            .or_insert_with(|| value.clone());
    }
    out
}

/// Returns the value of the first alias present in the record.
///
/// This is a priority search, not a merge: the first matching key wins even
/// if its value is null and a later alias would have matched a non-null one.
pub fn resolve<'a>(record: &'a RawRecord, aliases: &[&str]) -> Option<&'a Value> {
    aliases.iter().find_map(|key| record.get(*key))
}

/// Resolves a field as a trimmed string, falling back to `default` when the
/// field is absent, null, or blank.
pub fn resolve_str(record: &RawRecord, aliases: &[&str], default: &str) -> String {
    match resolve(record, aliases) {
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => default.to_string(),
    }
}

/// Resolves a field as a number. Accepts JSON numbers and numeric strings;
/// the source spreadsheets use comma decimals, so `"450,5"` parses as 450.5.
/// Anything else is `None` — rejection, never a panic.
pub fn resolve_f64(record: &RawRecord, aliases: &[&str]) -> Option<f64> {
    match resolve(record, aliases)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', ".").parse().ok(),
        _ => None,
    }
}
