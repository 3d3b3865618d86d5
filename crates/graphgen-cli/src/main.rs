//! graphgen CLI - generate typed graph data-access code from annotated records.
//!
//! Run `graphgen` inside a module directory (or pass `--pkg`) to emit the
//! client, query builders and command surface next to the record types.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

mod commands;

use commands::{generate::GenerateArgs, golden::GoldenArgs, inspect::InspectArgs};

/// graphgen - typed data-access code for graph record types.
///
/// Without a subcommand, `graphgen [FLAGS]` behaves like `graphgen generate [FLAGS]`.
#[derive(Parser, Debug)]
#[command(
    name = "graphgen",
    author,
    version,
    about = "Generate typed graph data-access code from annotated Rust record types",
    long_about = None,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(flatten)]
    generate: GenerateArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse, infer and write generated code (default command).
    Generate(GenerateArgs),

    /// Print the inferred model without writing anything.
    Inspect(InspectArgs),

    /// Compare generated output with a reference directory.
    Golden(GoldenArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Generate(cli.generate)) {
        Commands::Generate(args) => commands::generate::execute(&args, cli.quiet),
        Commands::Inspect(args) => commands::inspect::execute(&args),
        Commands::Golden(args) => commands::golden::execute(&args),
    }
}
