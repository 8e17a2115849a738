//! Schedule Cleaner CLI
//!
//! raw_response.json → cleaned_result.json 변환 도구

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use cpbl_core::CleanError;
#[cfg(feature = "cli")]
use schedule_cleaner::{CleanMetadata, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "schedule_cleaner")]
#[command(about = "Clean raw CPBL schedule dumps into compact game records", long_about = None)]
struct Cli {
    /// Input JSON file path
    #[arg(long, default_value = DEFAULT_INPUT_FILE)]
    r#in: PathBuf,

    /// Output JSON file path
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    out: PathBuf,

    /// Keep only games whose GameDate starts with this prefix
    /// (e.g. "2025", "2025-06", "2025-06-28")
    #[arg(long)]
    date: Option<String>,

    /// Output metadata JSON file
    #[arg(long)]
    metadata: Option<PathBuf>,
}

#[cfg(feature = "cli")]
fn main() {
    env_logger::init();
    let cli = Cli::parse();

    println!("📂 Reading: {} ...", cli.r#in.display());

    match run(&cli) {
        Ok(meta) => {
            println!("✅ Cleaned {} records.", meta.record_count);
            println!("💾 Saved to: {}", cli.out.display());
            println!("🎉 Done!");
        }
        Err(err) => {
            log::debug!("{err:?}");
            println!("❌ {err}");
            std::process::exit(err.exit_code());
        }
    }
}

#[cfg(feature = "cli")]
fn run(cli: &Cli) -> Result<CleanMetadata, CleanError> {
    let meta = schedule_cleaner::clean_schedule(&cli.r#in, &cli.out, cli.date.as_deref())?;

    if let Some(metadata_path) = &cli.metadata {
        save_metadata(metadata_path, &meta)?;
    }

    Ok(meta)
}

#[cfg(feature = "cli")]
fn save_metadata(path: &PathBuf, meta: &CleanMetadata) -> Result<(), CleanError> {
    use anyhow::Context;

    let metadata_json =
        serde_json::to_string_pretty(meta).context("Failed to serialize run metadata")?;
    std::fs::write(path, metadata_json).map_err(|source| CleanError::WriteFailure {
        path: path.clone(),
        source,
    })?;
    println!("📄 Metadata saved to: {}", path.display());
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("schedule_cleaner CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
