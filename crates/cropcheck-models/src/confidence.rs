//! Confidence scores and the verification threshold.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::verdict::Verdict;

/// Model certainty that an image shows the claimed crop.
///
/// Always finite and within `[0.0, 1.0]`. The placeholder model draws from
/// the narrower `[MIN, MAX)` range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "f64", into = "f64")]
pub struct Confidence(f64);

impl Confidence {
    /// Lower bound (inclusive) of the placeholder score range.
    pub const MIN: f64 = 0.75;
    /// Upper bound (exclusive) of the placeholder score range.
    pub const MAX: f64 = 0.98;
    /// Scores strictly above this value are verified.
    pub const VERIFICATION_THRESHOLD: f64 = 0.85;

    /// Wrap a raw score, rejecting NaN, infinities and values outside `[0, 1]`.
    pub fn new(value: f64) -> Result<Self, ConfidenceError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ConfidenceError(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Strict comparison against [`Self::VERIFICATION_THRESHOLD`].
    pub fn passes_threshold(&self) -> bool {
        self.0 > Self::VERIFICATION_THRESHOLD
    }

    /// Verdict implied by this score.
    pub fn verdict(&self) -> Verdict {
        if self.passes_threshold() {
            Verdict::Verified
        } else {
            Verdict::Rejected
        }
    }

    /// Whether the score falls in the placeholder model's range.
    pub fn in_model_range(&self) -> bool {
        (Self::MIN..Self::MAX).contains(&self.0)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl TryFrom<f64> for Confidence {
    type Error = ConfidenceError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("Confidence out of range [0, 1]: {0}")]
pub struct ConfidenceError(pub f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        assert!(!Confidence::new(0.85).unwrap().passes_threshold());
        assert!(Confidence::new(0.8500001).unwrap().passes_threshold());
        assert_eq!(Confidence::new(0.75).unwrap().verdict(), Verdict::Rejected);
        assert_eq!(Confidence::new(0.97).unwrap().verdict(), Verdict::Verified);
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Confidence::new(0.8).unwrap().to_string(), "0.80");
        assert_eq!(Confidence::new(0.877).unwrap().to_string(), "0.88");
        assert_eq!(Confidence::new(0.9799).unwrap().to_string(), "0.98");
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(Confidence::new(f64::NAN).is_err());
        assert!(Confidence::new(f64::INFINITY).is_err());
        assert!(Confidence::new(-0.1).is_err());
        assert!(Confidence::new(1.5).is_err());
        assert!(Confidence::new(0.0).is_ok());
        assert!(Confidence::new(1.0).is_ok());
    }

    #[test]
    fn test_model_range_is_half_open() {
        assert!(Confidence::new(0.75).unwrap().in_model_range());
        assert!(!Confidence::new(0.98).unwrap().in_model_range());
        assert!(!Confidence::new(0.5).unwrap().in_model_range());
    }

    #[test]
    fn test_serde_validates() {
        let c: Confidence = serde_json::from_str("0.9").unwrap();
        assert_eq!(c.value(), 0.9);
        assert!(serde_json::from_str::<Confidence>("2.0").is_err());
    }
}
