//! Command-line interface for cesr-export.

mod commands;

pub use commands::{parse_cli, run, run_with_cli, Cli};
