use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("Input file not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("Input is not valid JSON: {source}")]
    MalformedInput { source: serde_json::Error },

    #[error("Dataset is not a game list (found {found}); expected a JSON array or an object with a `data` array")]
    InvalidShape { found: String },

    #[error("Failed to write output file {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unexpected failure: {0}")]
    Unexpected(#[from] anyhow::Error),
}

impl CleanError {
    /// Process exit code for this failure kind.
    ///
    /// `InvalidShape` has a reserved code but the pipeline degrades to an
    /// empty output instead of terminating with it.
    pub fn exit_code(&self) -> i32 {
        match self {
            CleanError::Unexpected(_) => 1,
            CleanError::InputNotFound { .. } => 2,
            CleanError::MalformedInput { .. } => 3,
            CleanError::WriteFailure { .. } => 4,
            CleanError::InvalidShape { .. } => 5,
        }
    }
}

pub type Result<T> = std::result::Result<T, CleanError>;
