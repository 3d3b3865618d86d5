//! Golden command: compare generated output with reference files.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use graphgen_codegen::{Generator, GoldenHarness};
use tracing::info;

use super::generate::GenerateArgs;
use super::load_model;

/// Flags of the golden command.
#[derive(Args, Debug, Clone)]
pub struct GoldenArgs {
    /// Reference directory holding the expected output.
    #[arg(long)]
    pub reference: PathBuf,

    /// Replace the reference directory with the current output.
    #[arg(long)]
    pub accept: bool,

    /// Differing lines reported per file.
    #[arg(long, default_value_t = 10)]
    pub max_diffs: usize,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

/// Execute the golden command. Fails when the output differs.
pub fn execute(args: &GoldenArgs) -> Result<()> {
    let (config, package) = load_model(&args.generate.pkg, args.generate.overrides())?;
    let artifacts = Generator::new(config)
        .generate(&package)
        .with_context(|| format!("Failed to generate code for package `{}`", package.name))?;

    let harness = GoldenHarness::new(&args.reference).with_max_reported(args.max_diffs);
    if args.accept {
        harness
            .accept(&artifacts)
            .with_context(|| format!("Failed to update {}", args.reference.display()))?;
        info!(files = artifacts.len(), "Reference updated");
        println!(
            "Accepted {} files into {}",
            artifacts.len(),
            args.reference.display()
        );
        return Ok(());
    }

    let report = harness
        .verify(&artifacts)
        .with_context(|| format!("Failed to read {}", args.reference.display()))?;
    print!("{report}");
    if !report.is_clean() {
        bail!("Generated output differs from {}", args.reference.display());
    }
    Ok(())
}
