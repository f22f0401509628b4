//! Error types for exporting results.

use std::io;

use thiserror::Error;

/// Errors raised while writing or sharing an export.
///
/// These never reach the user as a dialog: [`crate::export_rows`] logs them
/// and reports a failed outcome.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode delimited text: {0}")]
    Encode(String),

    /// The share program could not be started.
    #[error("failed to launch share command '{program}': {source}")]
    ShareLaunch {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The share step ended without success (cancelled or failed).
    #[error("share command '{program}' did not complete ({status})")]
    ShareCancelled { program: String, status: String },
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        Self::Encode(err.to_string())
    }
}

/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
