use std::path::PathBuf;
use thiserror::Error;

/// Failures while writing a report somewhere other than the terminal
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("could not write CSV report to {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not serialize report to JSON: {0}")]
    Json(#[from] serde_json::Error),
}
