//! Date-prefix filtering over cleaned records
//!
//! `GameDate` is a fixed `YYYY-MM-DD` string, so `"2025"`, `"2025-06"` and
//! `"2025-06-28"` all select by plain prefix match. Slashes in the query are
//! accepted and normalized to dashes.

use serde_json::Value;

use crate::config::GAME_DATE_FIELD;
use crate::transform::CleanRecord;

/// Normalize a user-supplied date query (`2025/06` → `2025-06`).
pub fn normalize_date_query(query: &str) -> String {
    query.replace('/', "-")
}

/// Keep the records whose `GameDate` starts with the normalized query.
///
/// Records with a missing or non-string `GameDate` never match.
pub fn filter_by_date(records: &[CleanRecord], query: &str) -> Vec<CleanRecord> {
    let prefix = normalize_date_query(query);
    records
        .iter()
        .filter(|record| {
            record
                .get(GAME_DATE_FIELD)
                .and_then(Value::as_str)
                .is_some_and(|date| date.starts_with(&prefix))
        })
        .cloned()
        .collect()
}
