//! Verifier client error types.

use std::time::Duration;

use cropcheck_models::OutcomeParseError;
use thiserror::Error;

pub type MlResult<T> = Result<T, MlError>;

#[derive(Debug, Error)]
pub enum MlError {
    #[error("Verifier not found: {0}")]
    VerifierNotFound(String),

    #[error("Verifier exited with status {code:?}: {stderr}")]
    VerifierFailed { code: Option<i32>, stderr: String },

    #[error("Verifier produced no output")]
    EmptyOutput,

    #[error("Invalid verifier output {line:?}: {source}")]
    InvalidResponse {
        line: String,
        #[source]
        source: OutcomeParseError,
    },

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MlError {
    pub fn verifier_failed(code: Option<i32>, stderr: impl Into<String>) -> Self {
        Self::VerifierFailed {
            code,
            stderr: stderr.into(),
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, MlError::Timeout(_) | MlError::Io(_))
    }

    /// Stable label for metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            MlError::VerifierNotFound(_) => "not_found",
            MlError::VerifierFailed { .. } => "exit_status",
            MlError::EmptyOutput => "empty_output",
            MlError::InvalidResponse { .. } => "invalid_output",
            MlError::Timeout(_) => "timeout",
            MlError::Io(_) => "io",
        }
    }
}
