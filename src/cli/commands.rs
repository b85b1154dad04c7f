//! CLI definitions for cesr-export.
//!
//! The exporter takes no meaningful input: one invocation produces one JSON
//! document on stdout. The parser exists for `--help`/`--version` and the
//! log-level option.

use clap::Parser;
use tracing::info;

use crate::export;

/// CESR codec size-schema exporter.
#[derive(Parser)]
#[command(name = "cesr-export")]
#[command(about = "Export the CESR code tables and their size schemas as JSON")]
#[command(version)]
#[command(
    long_about = "cesr-export dumps the matter, indexer, and counter code registries as one flat JSON array of size descriptors.\n\nThe output feeds code generators targeting other languages.\n\nExample usage:\n  cesr-export > codec.json"
)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info")]
    pub log_level: String,
}

/// Parse CLI arguments and return the Cli struct.
///
/// This allows main.rs to access CLI arguments (like log_level) before
/// running the export.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Run the CLI by parsing arguments and executing the export.
pub fn run() -> anyhow::Result<()> {
    run_with_cli(parse_cli())
}

/// Run the export with the parsed arguments.
///
/// This is the main entry point for the cesr-export CLI. Any registry load
/// failure aborts before a single byte reaches stdout.
pub fn run_with_cli(_cli: Cli) -> anyhow::Result<()> {
    let records = export::build_descriptors()?;
    info!(records = records.len(), "code registries enumerated");

    export::write_to(&records, std::io::stdout().lock())?;
    Ok(())
}
