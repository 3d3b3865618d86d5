//! Generate command: parse, infer and write artifacts.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use graphgen_codegen::Generator;
use graphgen_core::{ConfigOverrides, Package};

use super::load_model;

/// Flags of the generate command.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Directory holding the record declarations.
    #[arg(long, default_value = ".")]
    pub pkg: PathBuf,

    /// Output directory (defaults to --pkg).
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Directory for the command-surface main.rs (defaults to <output>/cmd/<package>).
    #[arg(long)]
    pub cli_dir: Option<PathBuf>,

    /// Name of the generated command surface (defaults to the package name).
    #[arg(long)]
    pub cli_name: Option<String>,

    /// Wire validation into the generated command surface.
    #[arg(long)]
    pub with_validator: bool,

    /// Skip the command surface.
    #[arg(long)]
    pub no_cli: bool,

    /// Runtime crate referenced by generated code.
    #[arg(long)]
    pub runtime_crate: Option<String>,
}

impl GenerateArgs {
    /// Flags that override `graphgen.toml`. Unset switches keep file values.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            output_dir: self.output.clone(),
            cli_dir: self.cli_dir.clone(),
            cli_name: self.cli_name.clone(),
            with_validator: self.with_validator.then_some(true),
            emit_cli: self.no_cli.then_some(false),
            runtime_crate: self.runtime_crate.clone(),
        }
    }
}

/// Execute the generate command.
pub fn execute(args: &GenerateArgs, quiet: bool) -> Result<()> {
    let (config, package) = load_model(&args.pkg, args.overrides())?;
    let output_dir = config.output_dir();

    if !quiet {
        print_summary(&package);
        println!("\nGenerating code into {} ...", output_dir.display());
    }

    let artifacts = Generator::new(config)
        .generate_to_disk(&package)
        .with_context(|| format!("Failed to generate code for package `{}`", package.name))?;

    if !quiet {
        println!("Done. Wrote {} files.", artifacts.len());
    }
    Ok(())
}

/// Print the package overview shown before generation.
pub fn print_summary(package: &Package) {
    println!("Package: {}", package.name);
    println!("Entities: {}", package.entities.len());
    for entity in &package.entities {
        let search = entity
            .search
            .as_ref()
            .map(|s| format!(" (searchable on {})", s.field))
            .unwrap_or_default();
        println!("  - {}: {} fields{}", entity.name, entity.fields.len(), search);
    }
}
