//! Threshold-based crop verifier.

use tracing::debug;

use cropcheck_models::{Confidence, VerificationOutcome, VerificationRequest};

use crate::error::{VerifierError, VerifierResult};
use crate::model::{ConfidenceModel, MockCropModel};

/// Turns model scores into verdicts.
#[derive(Debug, Clone)]
pub struct CropVerifier<M> {
    model: M,
}

impl CropVerifier<MockCropModel> {
    /// Verifier over the OS-seeded placeholder model.
    pub fn mock() -> Self {
        Self::new(MockCropModel::new())
    }

    /// Verifier over a deterministic placeholder model.
    pub fn seeded(seed: u64) -> Self {
        Self::new(MockCropModel::seeded(seed))
    }
}

impl<M: ConfidenceModel> CropVerifier<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Score the request and apply the verification threshold.
    ///
    /// The verdict is decided on the raw score, before the two-decimal
    /// rounding used for display.
    pub fn verify(&mut self, request: &VerificationRequest) -> VerifierResult<VerificationOutcome> {
        let raw = self.model.score(request)?;
        let confidence = Confidence::new(raw).map_err(|_| VerifierError::InvalidConfidence(raw))?;
        let outcome = VerificationOutcome::new(request.crop_type.clone(), confidence);

        debug!(
            model = self.model.name(),
            crop_type = %request.crop_type,
            confidence = raw,
            verdict = %outcome.verdict,
            "Crop verification complete"
        );

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cropcheck_models::Verdict;

    /// Model returning a fixed sequence of scores.
    struct ScriptedModel(Vec<f64>);

    impl ConfidenceModel for ScriptedModel {
        fn name(&self) -> &str {
            "scripted"
        }

        fn score(&mut self, _request: &VerificationRequest) -> VerifierResult<f64> {
            self.0
                .pop()
                .ok_or_else(|| VerifierError::model_failed("no scores left"))
        }
    }

    fn request() -> VerificationRequest {
        VerificationRequest::new("leaf.jpg", "wheat")
    }

    #[test]
    fn test_threshold_boundaries() {
        let mut verifier = CropVerifier::new(ScriptedModel(vec![0.85, 0.8500001, 0.75, 0.979]));

        let outcome = verifier.verify(&request()).unwrap();
        assert_eq!(outcome.verdict, Verdict::Verified);
        assert_eq!(outcome.to_line(), "VERIFIED:wheat:CONFIDENCE=0.98");

        assert_eq!(verifier.verify(&request()).unwrap().verdict, Verdict::Rejected);
        assert_eq!(verifier.verify(&request()).unwrap().verdict, Verdict::Verified);

        let at_threshold = verifier.verify(&request()).unwrap();
        assert_eq!(at_threshold.verdict, Verdict::Rejected);
        assert_eq!(at_threshold.to_line(), "REJECTED:wheat:CONFIDENCE=0.85");
    }

    #[test]
    fn test_invalid_scores_are_rejected() {
        let mut verifier = CropVerifier::new(ScriptedModel(vec![f64::NAN, 1.2]));
        assert!(matches!(
            verifier.verify(&request()),
            Err(VerifierError::InvalidConfidence(v)) if v == 1.2
        ));
        assert!(matches!(
            verifier.verify(&request()),
            Err(VerifierError::InvalidConfidence(_))
        ));
    }

    #[test]
    fn test_model_errors_propagate() {
        let mut verifier = CropVerifier::new(ScriptedModel(vec![]));
        assert!(matches!(verifier.verify(&request()), Err(VerifierError::ModelFailed(_))));
    }

    #[test]
    fn test_verdict_matches_raw_confidence() {
        let mut verifier = CropVerifier::seeded(2024);
        for _ in 0..1_000 {
            let outcome = verifier.verify(&request()).unwrap();
            assert_eq!(outcome.crop_type, "wheat");
            assert!(outcome.confidence.in_model_range());
            assert_eq!(
                outcome.is_verified(),
                outcome.confidence.value() > Confidence::VERIFICATION_THRESHOLD
            );
        }
    }

    #[test]
    fn test_seeded_verifiers_agree() {
        let mut a = CropVerifier::seeded(9);
        let mut b = CropVerifier::seeded(9);
        for _ in 0..16 {
            assert_eq!(a.verify(&request()).unwrap(), b.verify(&request()).unwrap());
        }
    }
}
