//! CLI command implementations.

pub mod generate;
pub mod golden;
pub mod inspect;

use std::path::Path;

use anyhow::{Context, Result};
use graphgen_core::{ConfigOverrides, GenerateConfig, Package};
use tracing::debug;

/// Load configuration for `pkg`, parse the sources and run inference.
pub fn load_model(pkg: &Path, overrides: ConfigOverrides) -> Result<(GenerateConfig, Package)> {
    let config = GenerateConfig::load(pkg)
        .with_context(|| format!("Failed to load configuration for {}", pkg.display()))?
        .merge(overrides)
        .context("Invalid command-line configuration")?;
    debug!(?config, "Resolved configuration");

    let mut package = graphgen_parser::parse(&config.package_dir)
        .with_context(|| format!("Failed to parse {}", config.package_dir.display()))?;
    graphgen_infer::infer(&mut package)
        .with_context(|| format!("Failed to infer model for package `{}`", package.name))?;

    Ok((config, package))
}
