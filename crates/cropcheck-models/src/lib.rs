//! Shared data models for crop verification.
//!
//! This crate provides Serde-serializable types for:
//! - Verification requests (image path + claimed crop type)
//! - Confidence scores and the verification threshold
//! - Verdicts and the single-line outcome format printed by `crop-verify`

pub mod confidence;
pub mod outcome;
pub mod request;
pub mod verdict;

// Re-export common types
pub use confidence::{Confidence, ConfidenceError};
pub use outcome::{OutcomeParseError, VerificationOutcome};
pub use request::VerificationRequest;
pub use verdict::{Verdict, VerdictParseError};
