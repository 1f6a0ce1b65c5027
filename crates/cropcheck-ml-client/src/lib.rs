//! Client for the crop verifier.
//!
//! The verifier is an external executable (`crop-verify` by default) that
//! takes `<image_path> <crop_type>` and prints one outcome line. This crate
//! spawns it, enforces a timeout, and parses the line into a
//! [`VerificationOutcome`](cropcheck_models::VerificationOutcome).
//!
//! Once a real model exists the executable can be swapped without touching
//! callers, as long as it keeps the same line format.

pub mod client;
pub mod config;
pub mod error;
pub mod metrics;

pub use client::VerifierClient;
pub use config::VerifierClientConfig;
pub use error::{MlError, MlResult};
