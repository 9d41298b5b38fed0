use std::path::PathBuf;

use thiserror::Error;
use trekgrid_core::GridError;

/// Failures surfaced by the command-line tools.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed grid: {0}")]
    Grid(#[from] GridError),
    #[error("strict mode: {0}")]
    StrictViolation(String),
    #[error("failed to encode result: {0}")]
    Json(#[from] serde_json::Error),
}
