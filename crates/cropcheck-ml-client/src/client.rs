//! Crop verifier subprocess client.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::process::Command;
use tracing::{debug, warn};

use cropcheck_models::{VerificationOutcome, VerificationRequest};

use crate::config::VerifierClientConfig;
use crate::error::{MlError, MlResult};
use crate::metrics;

/// Runs the verifier executable and reads back its outcome line.
#[derive(Debug, Clone)]
pub struct VerifierClient {
    config: VerifierClientConfig,
}

impl VerifierClient {
    pub fn new(config: VerifierClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VerifierClientConfig {
        &self.config
    }

    /// Resolve the verifier executable on PATH.
    pub fn check_available(&self) -> MlResult<PathBuf> {
        which::which(&self.config.program).map_err(|_| self.not_found())
    }

    /// Verify a crop image and parse the verifier's outcome.
    pub async fn verify(&self, request: &VerificationRequest) -> MlResult<VerificationOutcome> {
        let result = self.verify_raw(request).await.and_then(|line| {
            VerificationOutcome::parse_line(&line)
                .map_err(|source| MlError::InvalidResponse { line, source })
        });

        match &result {
            Ok(outcome) => metrics::record_outcome(outcome.verdict),
            Err(e) => metrics::record_failure(e.reason()),
        }

        result
    }

    /// Verify a crop image and return the verifier's line unparsed.
    pub async fn verify_raw(&self, request: &VerificationRequest) -> MlResult<String> {
        self.with_retry(|| self.run_once(request)).await
    }

    async fn run_once(&self, request: &VerificationRequest) -> MlResult<String> {
        let started = Instant::now();

        debug!(
            program = %self.config.program.display(),
            crop_type = %request.crop_type,
            "Running crop verifier"
        );

        let child = Command::new(&self.config.program)
            .args(&self.config.args_prefix)
            .arg(&request.image_path)
            .arg(&request.crop_type)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => self.not_found(),
                _ => MlError::Io(e),
            })?;

        // Dropping the wait future on timeout kills the child.
        let output = match tokio::time::timeout(self.config.timeout, child.wait_with_output()).await {
            Ok(result) => result?,
            Err(_) => {
                warn!(
                    "Crop verifier timed out after {:?}, killing process",
                    self.config.timeout
                );
                return Err(MlError::Timeout(self.config.timeout));
            }
        };

        metrics::record_duration(started.elapsed().as_secs_f64());

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(MlError::verifier_failed(output.status.code(), stderr));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        stdout
            .lines()
            .find(|line| !line.trim().is_empty())
            .map(str::to_string)
            .ok_or(MlError::EmptyOutput)
    }

    /// Execute with retry logic.
    async fn with_retry<F, Fut, T>(&self, operation: F) -> MlResult<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = MlResult<T>>,
    {
        let mut attempt = 0;
        loop {
            match operation().await {
                Err(e) if e.is_retryable() && attempt < self.config.max_retries => {
                    let delay = Duration::from_millis(500 * 2u64.pow(attempt));
                    warn!(
                        "Crop verification failed (attempt {}), retrying in {:?}: {}",
                        attempt + 1,
                        delay,
                        e
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    fn not_found(&self) -> MlError {
        MlError::VerifierNotFound(self.config.program.display().to_string())
    }
}
