//! Verification verdicts.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Binary result of a crop verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Confidence was strictly above the verification threshold.
    Verified,
    /// Confidence was at or below the verification threshold.
    Rejected,
}

impl Verdict {
    /// Returns the wire token for this verdict.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Verified => "VERIFIED",
            Verdict::Rejected => "REJECTED",
        }
    }

    /// Returns true for `Verified`.
    pub fn is_verified(&self) -> bool {
        matches!(self, Verdict::Verified)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Verdict {
    type Err = VerdictParseError;

    /// Only the exact upper-case tokens are accepted; the line format is
    /// machine-produced and case is part of the contract.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VERIFIED" => Ok(Verdict::Verified),
            "REJECTED" => Ok(Verdict::Rejected),
            _ => Err(VerdictParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown verdict: {0}")]
pub struct VerdictParseError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_parse() {
        assert_eq!("VERIFIED".parse::<Verdict>().unwrap(), Verdict::Verified);
        assert_eq!("REJECTED".parse::<Verdict>().unwrap(), Verdict::Rejected);
        assert!("verified".parse::<Verdict>().is_err());
        assert!("".parse::<Verdict>().is_err());
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Verified.to_string(), "VERIFIED");
        assert_eq!(Verdict::Rejected.to_string(), "REJECTED");
    }

    #[test]
    fn test_verdict_serde() {
        let json = serde_json::to_string(&Verdict::Verified).unwrap();
        assert_eq!(json, "\"VERIFIED\"");
        let back: Verdict = serde_json::from_str("\"REJECTED\"").unwrap();
        assert_eq!(back, Verdict::Rejected);
    }
}
