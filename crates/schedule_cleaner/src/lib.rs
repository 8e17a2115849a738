//! Schedule Cleaner Library
//!
//! raw schedule JSON → 정제된 JSON 변환 파이프라인
//! Load → clean (field projection + KindCode translation) → pretty write

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use std::fs;
use std::path::Path;

use cpbl_core::{clean_dataset, filter_by_date, get_clean_config, CleanError, CleanRecord};

// Re-export the domain surface so CLI callers need only this crate
pub use cpbl_core::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};

/// Summary of one cleaning run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanMetadata {
    /// Cleaned record count (after the optional date filter)
    pub record_count: usize,
    /// Raw input size (bytes)
    pub original_size: u64,
    /// Pretty-printed output size (bytes)
    pub output_size: u64,
    /// Creation time (RFC3339)
    pub created_at: String,
}

/// Read and parse the raw dataset.
///
/// A missing path is [`CleanError::InputNotFound`]; syntactically invalid
/// JSON is [`CleanError::MalformedInput`]. No shape validation happens here,
/// the parsed value is returned verbatim.
pub fn load_dataset(path: &Path) -> Result<Value, CleanError> {
    if !path.exists() {
        return Err(CleanError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;

    let value =
        serde_json::from_str(&text).map_err(|source| CleanError::MalformedInput { source })?;

    Ok(value)
}

/// Serialize records as pretty JSON (4-space indent, non-ASCII kept literal)
/// and write them to `path`, replacing any existing content.
pub fn write_records(path: &Path, records: &[CleanRecord]) -> Result<(), CleanError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    records
        .serialize(&mut serializer)
        .context("Failed to serialize cleaned records")?;

    fs::write(path, buf).map_err(|source| CleanError::WriteFailure {
        path: path.to_path_buf(),
        source,
    })
}

/// Run the whole pipeline: load, clean, optionally filter by date, write.
///
/// An invalid top-level shape is logged as a warning and degrades to an
/// empty record list, so the run still writes `[]`. Only the I/O failures
/// (`InputNotFound`, `MalformedInput`, `WriteFailure`) abort.
pub fn clean_schedule(
    input: &Path,
    output: &Path,
    date_query: Option<&str>,
) -> Result<CleanMetadata, CleanError> {
    let raw = load_dataset(input)?;
    let original_size = file_size(input)?;

    let config = get_clean_config();
    let records = match clean_dataset(&raw, config) {
        Ok(records) => records,
        Err(err @ CleanError::InvalidShape { .. }) => {
            log::warn!("{err}; writing an empty result");
            Vec::new()
        }
        Err(err) => return Err(err),
    };

    let records = match date_query {
        Some(query) => filter_by_date(&records, query),
        None => records,
    };

    write_records(output, &records)?;
    let output_size = file_size(output)?;

    Ok(CleanMetadata {
        record_count: records.len(),
        original_size,
        output_size,
        created_at: chrono::Utc::now().to_rfc3339(),
    })
}

fn file_size(path: &Path) -> Result<u64, CleanError> {
    let meta = fs::metadata(path)
        .with_context(|| format!("Failed to stat file: {}", path.display()))?;
    Ok(meta.len())
}
