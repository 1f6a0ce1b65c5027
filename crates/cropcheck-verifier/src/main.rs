//! `crop-verify` binary.
//!
//! Usage: `crop-verify <image_path> <crop_type>`

use anyhow::Context;

use cropcheck_verifier::{init_logging, run, Cli, CropVerifier};

fn main() -> anyhow::Result<()> {
    // Missing arguments exit here with a usage error on stderr.
    let cli = Cli::parse_opaque();

    init_logging();

    let mut verifier = CropVerifier::mock();
    let mut stdout = std::io::stdout().lock();
    run(&cli, &mut verifier, &mut stdout).context("Crop verification failed")?;

    Ok(())
}
