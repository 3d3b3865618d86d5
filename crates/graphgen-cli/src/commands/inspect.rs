//! Inspect command: show the inferred model.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use graphgen_core::{ConfigOverrides, GenerateConfig, Package, ReverseEdge};
use serde::Serialize;

use super::{generate::print_summary, load_model};

/// Flags of the inspect command.
#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    /// Directory holding the record declarations.
    #[arg(long, default_value = ".")]
    pub pkg: PathBuf,

    /// Print the full model as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct InspectReport<'a> {
    config: &'a GenerateConfig,
    package: &'a Package,
}

/// Execute the inspect command.
pub fn execute(args: &InspectArgs) -> Result<()> {
    let (config, package) = load_model(&args.pkg, ConfigOverrides::default())?;

    if args.json {
        let report = InspectReport {
            config: &config,
            package: &package,
        };
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize model")?;
        println!("{json}");
        return Ok(());
    }

    print_summary(&package);
    for entity in &package.entities {
        println!("\n{} ({}:{})", entity.name, entity.file, entity.line);
        for field in &entity.fields {
            let reverse = match &field.reverse {
                Some(ReverseEdge::Paired { entity, field }) => format!(" <- {entity}.{field}"),
                Some(ReverseEdge::Managed { target, .. }) => format!(" <- {target} (managed)"),
                None => String::new(),
            };
            let inferred = match field.directives.type_hint {
                Some(hint) if field.directives.type_inferred => format!(" (type={hint} inferred)"),
                _ => String::new(),
            };
            println!(
                "  {:<20} {:<10} {:<24} {}{}{}",
                field.name,
                field.kind.label(),
                field.effective_predicate,
                field.directives,
                inferred,
                reverse
            );
        }
    }
    Ok(())
}
