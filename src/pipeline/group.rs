//! Partitioning of weighing records by animal identity.

use std::collections::HashMap;

use crate::record::{ANIMAL_ALIASES, RawRecord, resolve_str};

/// Group key for records whose animal field is absent or blank.
pub const UNKNOWN_ANIMAL: &str = "UNKNOWN";

/// Partitions records by the trimmed string form of the resolved animal field.
///
/// Groups appear in first-occurrence order of each key; within a group the
/// input order is preserved. Records with no usable identity all land in the
/// [`UNKNOWN_ANIMAL`] group.
pub fn group_by_animal(records: &[RawRecord]) -> Vec<(String, Vec<RawRecord>)> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<RawRecord>> = HashMap::new();

    for record in records {
        let key = resolve_str(record, ANIMAL_ALIASES, UNKNOWN_ANIMAL);
        let bucket = groups.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            Vec::new()
        });
        bucket.push(record.clone());
    }

    order
        .into_iter()
        .map(|key| {
            let rows = groups.remove(&key).unwrap_or_default();
            (key, rows)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn named(animal: Value, weight: &str) -> RawRecord {
        [
            ("ANIMAL".to_string(), animal),
            ("PESO".to_string(), json!(weight)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_groups_keep_first_occurrence_order() {
        let records = vec![
            named(json!("ZECA"), "200"),
            named(json!("ANA"), "100"),
            named(json!("ZECA"), "210"),
        ];
        let groups = group_by_animal(&records);
        let keys: Vec<&str> = groups.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["ZECA", "ANA"]);
        assert_eq!(groups[0].1.len(), 2);
    }

    #[test]
    fn test_within_group_order_is_input_order() {
        let records = vec![
            named(json!("ANA"), "100"),
            named(json!("ANA"), "110"),
            named(json!("ANA"), "105"),
        ];
        let groups = group_by_animal(&records);
        let weights: Vec<&Value> = groups[0].1.iter().map(|r| &r["PESO"]).collect();
        assert_eq!(weights, [&json!("100"), &json!("110"), &json!("105")]);
    }

    #[test]
    fn test_missing_or_blank_animal_falls_back_to_unknown() {
        let mut anonymous = named(json!(""), "100");
        let mut absent = named(json!("x"), "110");
        absent.remove("ANIMAL");
        anonymous.insert("ANIMAL".to_string(), json!("   "));

        let groups = group_by_animal(&[anonymous, absent]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, UNKNOWN_ANIMAL);
        assert_eq!(groups[0].1.len(), 2);
    }

    #[test]
    fn test_identity_is_trimmed() {
        let records = vec![named(json!(" BESS "), "100"), named(json!("BESS"), "120")];
        let groups = group_by_animal(&records);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, "BESS");
    }
}
