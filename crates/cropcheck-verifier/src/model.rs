//! Confidence models.
//!
//! [`ConfidenceModel`] is the point where real image inference will plug in.
//! Today the only implementation is [`MockCropModel`], which ignores the image
//! and draws a uniform score from `[Confidence::MIN, Confidence::MAX)`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use cropcheck_models::{Confidence, VerificationRequest};

use crate::error::VerifierResult;

/// Produces a raw confidence score for a verification request.
pub trait ConfidenceModel {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Score the request. Implementations must return a value in `[0, 1]`.
    fn score(&mut self, request: &VerificationRequest) -> VerifierResult<f64>;
}

/// Placeholder model backed by a uniform random draw.
///
/// The generator is injectable so callers can pin results with a seed.
#[derive(Debug, Clone)]
pub struct MockCropModel<R = StdRng> {
    rng: R,
}

impl MockCropModel<StdRng> {
    /// Model seeded from OS entropy. Each process gets different scores.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Deterministic model for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for MockCropModel<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MockCropModel<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ConfidenceModel for MockCropModel<R> {
    fn name(&self) -> &str {
        "mock"
    }

    fn score(&mut self, _request: &VerificationRequest) -> VerifierResult<f64> {
        Ok(self.rng.random_range(Confidence::MIN..Confidence::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> VerificationRequest {
        VerificationRequest::new("leaf.jpg", "wheat")
    }

    #[test]
    fn test_scores_stay_in_range() {
        let mut model = MockCropModel::seeded(7);
        for _ in 0..10_000 {
            let score = model.score(&request()).unwrap();
            assert!((Confidence::MIN..Confidence::MAX).contains(&score), "score {score}");
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let mut a = MockCropModel::seeded(42);
        let mut b = MockCropModel::seeded(42);
        for _ in 0..32 {
            assert_eq!(a.score(&request()).unwrap(), b.score(&request()).unwrap());
        }
    }

    #[test]
    fn test_both_sides_of_threshold_occur() {
        let mut model = MockCropModel::seeded(1);
        let scores: Vec<f64> = (0..1_000).map(|_| model.score(&request()).unwrap()).collect();
        assert!(scores.iter().any(|s| *s > Confidence::VERIFICATION_THRESHOLD));
        assert!(scores.iter().any(|s| *s <= Confidence::VERIFICATION_THRESHOLD));
    }

    #[test]
    fn test_image_path_is_not_touched() {
        let mut model = MockCropModel::seeded(3);
        let missing = VerificationRequest::new("/definitely/not/here.jpg", "rice");
        assert!(model.score(&missing).is_ok());
    }
}
