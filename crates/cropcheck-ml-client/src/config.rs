//! Verifier client configuration.

use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_PROGRAM: &str = "crop-verify";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_RETRIES: u32 = 1;

/// Configuration for [`crate::VerifierClient`].
#[derive(Debug, Clone)]
pub struct VerifierClientConfig {
    /// Verifier executable (name on PATH or a path)
    pub program: PathBuf,
    /// Arguments placed before `<image_path> <crop_type>`
    pub args_prefix: Vec<String>,
    /// Per-attempt timeout
    pub timeout: Duration,
    /// Retries for timeouts and spawn failures
    pub max_retries: u32,
}

impl Default for VerifierClientConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_PROGRAM),
            args_prefix: Vec::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl VerifierClientConfig {
    /// Create config from environment variables.
    ///
    /// - `CROP_VERIFIER_BIN`: executable (default `crop-verify`)
    /// - `CROP_VERIFIER_ARGS`: whitespace-separated prefix arguments
    /// - `CROP_VERIFIER_TIMEOUT`: seconds per attempt (default 30)
    /// - `CROP_VERIFIER_RETRIES`: retry count (default 1)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            program: lookup("CROP_VERIFIER_BIN")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PROGRAM)),
            args_prefix: lookup("CROP_VERIFIER_ARGS")
                .map(|s| s.split_whitespace().map(str::to_string).collect())
                .unwrap_or_default(),
            timeout: Duration::from_secs(
                lookup("CROP_VERIFIER_TIMEOUT")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            max_retries: lookup("CROP_VERIFIER_RETRIES")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_RETRIES),
        }
    }

    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_args_prefix<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args_prefix = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }
}
