//! Record projection and KindCode translation
//!
//! Normalizes a raw dataset into its underlying entry list, then projects
//! each entry down to the configured target fields. Exactly one field
//! (`KindCode`) is value-translated; everything else passes through verbatim.

use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::config::CleanConfig;
use crate::error::{CleanError, Result};

/// One cleaned game record: the target fields only, in target-field order.
///
/// Backed by serde_json's `preserve_order` map, so key order survives
/// serialization.
pub type CleanRecord = Map<String, Value>;

/// Resolve the underlying entry list of a raw dataset.
///
/// Accepted shapes: a bare JSON array, or an object carrying the array under
/// a `data` key. Anything else fails with [`CleanError::InvalidShape`].
pub fn normalize_dataset(value: &Value) -> Result<&[Value]> {
    match value {
        Value::Array(entries) => Ok(entries),
        Value::Object(map) => match map.get("data") {
            Some(Value::Array(entries)) => Ok(entries),
            _ => Err(CleanError::InvalidShape {
                found: "an object without a `data` array".to_string(),
            }),
        },
        other => Err(CleanError::InvalidShape {
            found: format!("a JSON {}", json_type_name(other)),
        }),
    }
}

/// Project one raw entry down to the target fields.
///
/// Fields absent from the entry become explicit nulls. An entry that is not
/// a JSON object has every lookup treated as absent, yielding an all-null
/// record. No entry is ever dropped.
pub fn clean_entry(entry: &Value, config: &CleanConfig) -> CleanRecord {
    let source = entry.as_object();
    let mut record = CleanRecord::new();

    for &field in &config.target_fields {
        let raw = source
            .and_then(|map| map.get(field))
            .cloned()
            .unwrap_or(Value::Null);

        let value = if field == config.remap_field {
            translate_code(raw, &config.kind_code_map)
        } else {
            raw
        };

        record.insert(field.to_string(), value);
    }

    record
}

/// Clean a whole dataset: normalize, then project every entry in order.
///
/// The result always has one record per raw entry, in the original order,
/// fully materialized.
pub fn clean_dataset(value: &Value, config: &CleanConfig) -> Result<Vec<CleanRecord>> {
    let entries = normalize_dataset(value)?;
    let records: Vec<CleanRecord> = entries
        .iter()
        .map(|entry| clean_entry(entry, config))
        .collect();

    log::debug!("Cleaned {} raw entries", records.len());
    Ok(records)
}

/// Translate a category code through the map.
///
/// Only an exact string match is translated; any other value (unknown code,
/// null, non-string) passes through unchanged.
fn translate_code(raw: Value, map: &HashMap<&'static str, &'static str>) -> Value {
    match raw.as_str().and_then(|code| map.get(code)) {
        Some(&label) => Value::String(label.to_string()),
        None => raw,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{get_clean_config, TARGET_FIELDS};
    use serde_json::json;

    #[test]
    fn test_clean_entry_projects_target_fields_in_order() {
        let config = get_clean_config();
        let entry = json!({
            "GameSno": 123,
            "KindCode": "A",
            "GameDate": "2024-03-29",
            "GameDateTimeS": "2024-03-29T18:35:00",
            "HomeTeamName": "統一7-ELEVEn獅",
            "HomeScore": 5,
            "VisitingTeamName": "樂天桃猿",
            "VisitingScore": 3,
            "FieldAbbe": "TNN"
        });

        let record = clean_entry(&entry, config);

        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, TARGET_FIELDS.to_vec());
        assert_eq!(record["KindCode"], json!("Regular Season"));
        assert_eq!(record["HomeScore"], json!(5));
        // Extra source fields are gone
        assert!(record.get("GameSno").is_none());
        assert!(record.get("FieldAbbe").is_none());
    }

    #[test]
    fn test_missing_fields_become_null() {
        let config = get_clean_config();
        let entry = json!({ "HomeTeamName": "味全龍" });

        let record = clean_entry(&entry, config);

        assert_eq!(record.len(), TARGET_FIELDS.len());
        assert_eq!(record["HomeTeamName"], json!("味全龍"));
        assert_eq!(record["GameDate"], Value::Null);
        assert_eq!(record["KindCode"], Value::Null);
    }

    #[test]
    fn test_unmapped_code_passes_through() {
        let config = get_clean_config();

        let record = clean_entry(&json!({ "KindCode": "Z" }), config);
        assert_eq!(record["KindCode"], json!("Z"));

        // A non-string code can never match a map key
        let record = clean_entry(&json!({ "KindCode": 7 }), config);
        assert_eq!(record["KindCode"], json!(7));

        let record = clean_entry(&json!({ "KindCode": null }), config);
        assert_eq!(record["KindCode"], Value::Null);
    }

    #[test]
    fn test_all_kind_codes_translate() {
        let config = get_clean_config();
        let expected = [
            ("A", "Regular Season"),
            ("B", "All-Star Game"),
            ("C", "Championship Series"),
            ("D", "Postseason Challenge"),
            ("E", "Exhibition Game"),
        ];

        for (code, label) in expected {
            let record = clean_entry(&json!({ "KindCode": code }), config);
            assert_eq!(record["KindCode"], json!(label), "code {}", code);
        }
    }

    #[test]
    fn test_degenerate_entry_yields_all_null_record() {
        let config = get_clean_config();

        for entry in [json!("not an object"), json!(42), json!([1, 2]), json!(null)] {
            let record = clean_entry(&entry, config);
            assert_eq!(record.len(), TARGET_FIELDS.len());
            assert!(record.values().all(Value::is_null));
        }
    }

    #[test]
    fn test_bare_array_and_data_object_clean_identically() {
        let config = get_clean_config();
        let games = json!([
            { "KindCode": "A", "GameDate": "2025-04-01" },
            { "KindCode": "E", "GameDate": "2025-03-01" }
        ]);
        let wrapped = json!({ "data": games.clone() });

        let from_array = clean_dataset(&games, config).unwrap();
        let from_object = clean_dataset(&wrapped, config).unwrap();

        assert_eq!(from_array, from_object);
        assert_eq!(from_array.len(), 2);
    }

    #[test]
    fn test_entry_order_is_preserved() {
        let config = get_clean_config();
        let games = json!([
            { "GameDate": "2025-06-03" },
            { "GameDate": "2025-06-01" },
            { "GameDate": "2025-06-02" }
        ]);

        let records = clean_dataset(&games, config).unwrap();

        let dates: Vec<&Value> = records.iter().map(|r| &r["GameDate"]).collect();
        assert_eq!(
            dates,
            vec![
                &json!("2025-06-03"),
                &json!("2025-06-01"),
                &json!("2025-06-02")
            ]
        );
    }

    #[test]
    fn test_invalid_shapes_fail_normalization() {
        let config = get_clean_config();

        for value in [json!({ "foo": 1 }), json!(42), json!("games"), json!(null)] {
            let err = clean_dataset(&value, config).unwrap_err();
            assert!(matches!(err, CleanError::InvalidShape { .. }), "{:?}", value);
        }

        // `data` present but not an array is still invalid
        let err = clean_dataset(&json!({ "data": 1 }), config).unwrap_err();
        assert!(matches!(err, CleanError::InvalidShape { .. }));
    }

    #[test]
    fn test_cleaning_is_deterministic_and_idempotent() {
        let config = get_clean_config();
        let games = json!([
            { "KindCode": "A", "GameDate": "2025-06-28", "HomeScore": 2 },
            { "KindCode": "Z" }
        ]);

        let first = clean_dataset(&games, config).unwrap();
        let second = clean_dataset(&games, config).unwrap();
        assert_eq!(first, second);

        // Re-cleaning cleaned records is a no-op apart from codes already
        // translated (labels are not map keys, so they pass through).
        let recleaned: Vec<CleanRecord> = first
            .iter()
            .map(|record| clean_entry(&Value::Object(record.clone()), config))
            .collect();
        assert_eq!(first, recleaned);
    }
}
