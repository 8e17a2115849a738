//! # cpbl_core - CPBL Schedule Record Cleaning
//!
//! Domain library for cleaning raw CPBL schedule dumps: projects each game
//! entry down to a fixed field set, translates the `KindCode` category code
//! to a display label, and filters cleaned records by date prefix.
//!
//! ## Features
//! - Tolerant dataset normalization (bare array or `{"data": [...]}`)
//! - Stable, order-preserving field projection (absent fields become null)
//! - Exact-match code translation, passthrough otherwise

pub mod config;
pub mod error;
pub mod filter;
pub mod transform;

pub use config::{
    get_clean_config, CleanConfig, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE, GAME_DATE_FIELD,
    KIND_CODE_FIELD, TARGET_FIELDS,
};
pub use error::{CleanError, Result};
pub use filter::{filter_by_date, normalize_date_query};
pub use transform::{clean_dataset, clean_entry, normalize_dataset, CleanRecord};
