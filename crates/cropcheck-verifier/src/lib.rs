//! Placeholder crop verification.
//!
//! This crate provides:
//! - The [`ConfidenceModel`] seam where real image inference will plug in
//! - [`MockCropModel`], a uniform random stand-in with an injectable RNG
//! - [`CropVerifier`], which applies the verification threshold
//! - The `crop-verify` command-line surface

pub mod cli;
pub mod error;
pub mod logging;
pub mod model;
pub mod verifier;

pub use cli::{run, Cli};
pub use error::{VerifierError, VerifierResult};
pub use logging::init_logging;
pub use model::{ConfidenceModel, MockCropModel};
pub use verifier::CropVerifier;
