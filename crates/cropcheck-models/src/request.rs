//! Verification request inputs.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The two caller-supplied inputs to a verification.
///
/// Both fields are opaque. `image_path` is carried for the eventual real
/// model and is never opened or checked for existence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VerificationRequest {
    pub image_path: String,
    pub crop_type: String,
}

impl VerificationRequest {
    pub fn new(image_path: impl Into<String>, crop_type: impl Into<String>) -> Self {
        Self {
            image_path: image_path.into(),
            crop_type: crop_type.into(),
        }
    }
}
