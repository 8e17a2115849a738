//! Static cleaning configuration
//!
//! 필드 목록과 KindCode 매핑 테이블. 프로세스 시작 시 1회 구성, 이후 읽기 전용.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Default input file name (raw schedule dump).
pub const DEFAULT_INPUT_FILE: &str = "raw_response.json";

/// Default output file name (cleaned records).
pub const DEFAULT_OUTPUT_FILE: &str = "cleaned_result.json";

/// Field whose short category code is translated to a display label.
pub const KIND_CODE_FIELD: &str = "KindCode";

/// Field holding the game date, used by the date-prefix filter.
pub const GAME_DATE_FIELD: &str = "GameDate";

/// Fields kept from each raw game entry, in output order.
pub const TARGET_FIELDS: [&str; 7] = [
    "KindCode",
    "GameDate",
    "GameDateTimeS",
    "HomeTeamName",
    "HomeScore",
    "VisitingTeamName",
    "VisitingScore",
];

/// Cleaning configuration: target field list plus the KindCode translation
/// table. Constructed once at startup, read-only thereafter.
#[derive(Debug, Clone)]
pub struct CleanConfig {
    /// Fields surviving projection, in output order
    pub target_fields: Vec<&'static str>,
    /// The one field whose value goes through `kind_code_map`
    pub remap_field: &'static str,
    /// Short category code → display label
    pub kind_code_map: HashMap<&'static str, &'static str>,
}

impl CleanConfig {
    fn new() -> Self {
        let kind_code_map = HashMap::from([
            ("A", "Regular Season"),
            ("B", "All-Star Game"),
            ("C", "Championship Series"),
            ("D", "Postseason Challenge"),
            ("E", "Exhibition Game"),
        ]);

        Self {
            target_fields: TARGET_FIELDS.to_vec(),
            remap_field: KIND_CODE_FIELD,
            kind_code_map,
        }
    }
}

static CLEAN_CONFIG: Lazy<CleanConfig> = Lazy::new(CleanConfig::new);

/// Process-wide cleaning configuration.
pub fn get_clean_config() -> &'static CleanConfig {
    &CLEAN_CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_covers_all_kind_codes() {
        let config = get_clean_config();
        for code in ["A", "B", "C", "D", "E"] {
            assert!(config.kind_code_map.contains_key(code));
        }
        assert_eq!(config.kind_code_map.len(), 5);
    }

    #[test]
    fn test_remap_field_is_a_target_field() {
        let config = get_clean_config();
        assert!(config.target_fields.contains(&config.remap_field));
        assert_eq!(config.target_fields, TARGET_FIELDS.to_vec());
    }
}
