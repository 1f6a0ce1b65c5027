//! Command-line surface of `crop-verify`.

use std::ffi::OsString;
use std::io::Write;
use std::iter;

use clap::Parser;
use tracing::debug;

use cropcheck_models::{VerificationOutcome, VerificationRequest};

use crate::error::VerifierResult;
use crate::model::ConfidenceModel;
use crate::verifier::CropVerifier;

/// Placeholder AI crop verification.
///
/// Prints one line: `<VERIFIED|REJECTED>:<crop_type>:CONFIDENCE=<d.dd>`.
///
/// Every argument is an opaque value, so there are no flags; `--help`,
/// `-V` and `--` are read as an image path or crop type like anything else.
#[derive(Debug, Parser)]
#[command(
    name = "crop-verify",
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Path to the crop image (accepted, not read)
    pub image_path: String,

    /// Claimed crop type, echoed verbatim in the output
    pub crop_type: String,

    /// Additional positionals are accepted and ignored
    #[arg(hide = true)]
    pub extra: Vec<String>,
}

impl Cli {
    /// Parse the process arguments, exiting with a usage error when fewer
    /// than two are given.
    pub fn parse_opaque() -> Self {
        Self::try_parse_opaque_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Parse `argv` (binary name first) with every user argument taken as a
    /// positional value.
    ///
    /// An escape `--` is inserted ahead of the user arguments so clap never
    /// interprets them as options or as its own separator.
    pub fn try_parse_opaque_from<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let bin = argv.next().unwrap_or_else(|| OsString::from("crop-verify"));

        Self::try_parse_from(iter::once(bin).chain(iter::once(OsString::from("--"))).chain(argv))
    }

    pub fn request(&self) -> VerificationRequest {
        VerificationRequest::new(self.image_path.clone(), self.crop_type.clone())
    }
}

/// Verify the request described by `cli` and write the outcome line to `out`.
pub fn run<M, W>(cli: &Cli, verifier: &mut CropVerifier<M>, out: &mut W) -> VerifierResult<VerificationOutcome>
where
    M: ConfidenceModel,
    W: Write,
{
    if !cli.extra.is_empty() {
        debug!(count = cli.extra.len(), "Ignoring extra arguments");
    }

    let outcome = verifier.verify(&cli.request())?;
    writeln!(out, "{}", outcome)?;
    out.flush()?;

    Ok(outcome)
}
