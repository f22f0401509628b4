//! Error types for simulation submission.

use thiserror::Error;

/// Message shown to the user for every submission failure.
pub const SUBMISSION_FAILED_MESSAGE: &str = "Failed to start simulation";

/// Errors that can occur while submitting a simulation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmissionError {
    /// The HTTP client could not be built from settings.
    #[error("invalid client configuration: {0}")]
    Config(String),

    /// Connection, TLS or timeout failure.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("simulation service returned HTTP {status}: {body}")]
    Status {
        /// Numeric HTTP status.
        status: u16,
        /// Response body, for logs.
        body: String,
    },

    /// The success body was not valid JSON.
    #[error("invalid JSON in simulation response: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl SubmissionError {
    /// The single user-facing message for any failure.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        SUBMISSION_FAILED_MESSAGE
    }
}

/// Result type alias for submission operations.
pub type Result<T> = std::result::Result<T, SubmissionError>;
