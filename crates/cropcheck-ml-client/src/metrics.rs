//! Verification metrics.
//!
//! Counters for verdicts and failures plus a latency histogram. Nothing is
//! exported unless the host process installs a recorder.

use metrics::{counter, histogram};

use cropcheck_models::Verdict;

/// Metric name constants for consistency.
pub mod names {
    /// Completed verifications by verdict.
    pub const VERIFICATIONS_TOTAL: &str = "crop_verifications_total";

    /// Failed verifications by reason.
    pub const FAILURES_TOTAL: &str = "crop_verification_failures_total";

    /// Verifier subprocess latency in seconds.
    pub const DURATION_SECONDS: &str = "crop_verification_duration_seconds";
}

pub fn record_outcome(verdict: Verdict) {
    counter!(names::VERIFICATIONS_TOTAL, "verdict" => verdict.as_str()).increment(1);
}

pub fn record_failure(reason: &'static str) {
    counter!(names::FAILURES_TOTAL, "reason" => reason).increment(1);
}

pub fn record_duration(secs: f64) {
    histogram!(names::DURATION_SECONDS).record(secs);
}
