//! Verifier error types.

use thiserror::Error;

pub type VerifierResult<T> = Result<T, VerifierError>;

#[derive(Debug, Error)]
pub enum VerifierError {
    #[error("Model failed: {0}")]
    ModelFailed(String),

    #[error("Model returned invalid confidence: {0}")]
    InvalidConfidence(f64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VerifierError {
    pub fn model_failed(msg: impl Into<String>) -> Self {
        Self::ModelFailed(msg.into())
    }
}
