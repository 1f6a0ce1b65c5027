//! Verification outcome and its single-line wire format.
//!
//! The verifier prints exactly one line:
//!
//! ```text
//! <VERDICT>:<crop_type>:CONFIDENCE=<d.dd>
//! ```
//!
//! `crop_type` is echoed verbatim and may itself contain `:`, so parsing takes
//! the verdict up to the first `:` and the confidence after the last
//! `:CONFIDENCE=` marker.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::confidence::Confidence;
use crate::verdict::Verdict;

const CONFIDENCE_MARKER: &str = ":CONFIDENCE=";

/// Result of verifying one image against a claimed crop type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VerificationOutcome {
    pub verdict: Verdict,
    pub crop_type: String,
    pub confidence: Confidence,
}

impl VerificationOutcome {
    /// Build an outcome, deriving the verdict from the raw score.
    pub fn new(crop_type: impl Into<String>, confidence: Confidence) -> Self {
        Self {
            verdict: confidence.verdict(),
            crop_type: crop_type.into(),
            confidence,
        }
    }

    /// Render the wire line (no trailing newline).
    pub fn to_line(&self) -> String {
        self.to_string()
    }

    /// Parse a wire line. A single trailing `\n` or `\r\n` is tolerated.
    pub fn parse_line(line: &str) -> Result<Self, OutcomeParseError> {
        line.parse()
    }

    pub fn is_verified(&self) -> bool {
        self.verdict.is_verified()
    }
}

impl fmt::Display for VerificationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}{}{}",
            self.verdict, self.crop_type, CONFIDENCE_MARKER, self.confidence
        )
    }
}

impl FromStr for VerificationOutcome {
    type Err = OutcomeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(s);

        let (verdict_token, rest) = line
            .split_once(':')
            .ok_or_else(|| OutcomeParseError::MissingVerdict(line.to_string()))?;

        let verdict: Verdict = verdict_token
            .parse()
            .map_err(|_| OutcomeParseError::UnknownVerdict(verdict_token.to_string()))?;

        // The marker starts with ':' so an empty crop type still leaves it intact.
        let marked = format!(":{}", rest);
        let (crop_type, raw_confidence) = marked
            .rsplit_once(CONFIDENCE_MARKER)
            .ok_or_else(|| OutcomeParseError::MissingConfidence(line.to_string()))?;
        let crop_type = crop_type.strip_prefix(':').unwrap_or(crop_type);

        if !is_two_decimal(raw_confidence) {
            return Err(OutcomeParseError::MalformedConfidence(
                raw_confidence.to_string(),
            ));
        }
        let value: f64 = raw_confidence
            .parse()
            .map_err(|_| OutcomeParseError::MalformedConfidence(raw_confidence.to_string()))?;
        let confidence = Confidence::new(value)
            .map_err(|_| OutcomeParseError::MalformedConfidence(raw_confidence.to_string()))?;

        // The verdict is decided on the unrounded score, so a printed 0.85 is
        // compatible with either verdict.
        let threshold = Confidence::VERIFICATION_THRESHOLD;
        let consistent = match verdict {
            Verdict::Verified => value >= threshold,
            Verdict::Rejected => value <= threshold,
        };
        if !consistent {
            return Err(OutcomeParseError::InconsistentVerdict { verdict, confidence });
        }

        Ok(Self {
            verdict,
            crop_type: crop_type.to_string(),
            confidence,
        })
    }
}

/// Matches `\d\.\d{2}` exactly.
fn is_two_decimal(s: &str) -> bool {
    let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());

    match s.split_once('.') {
        Some((whole, frac)) => {
            whole.len() == 1 && frac.len() == 2 && all_digits(whole) && all_digits(frac)
        }
        None => false,
    }
}

/// Errors produced when a verifier output line does not follow the format.
#[derive(Debug, Error, PartialEq)]
pub enum OutcomeParseError {
    #[error("Missing verdict separator in line: {0:?}")]
    MissingVerdict(String),

    #[error("Unknown verdict: {0:?}")]
    UnknownVerdict(String),

    #[error("Missing CONFIDENCE field in line: {0:?}")]
    MissingConfidence(String),

    #[error("Malformed confidence value: {0:?}")]
    MalformedConfidence(String),

    #[error("Verdict {verdict} contradicts confidence {confidence}")]
    InconsistentVerdict {
        verdict: Verdict,
        confidence: Confidence,
    },
}
