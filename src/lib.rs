//! cesr-export: CESR codec size-schema exporter.
//!
//! Introspects the three parallel code registries of the CESR encoding
//! scheme — primitive material ("matter"), indexed signatures ("indexer"),
//! and group counts ("counter") — and produces one flat ordered list of
//! descriptor records for downstream tooling.

pub mod cli;
pub mod error;
pub mod export;
pub mod registry;
pub mod schema;

// Re-export commonly used error types
pub use error::{ExportError, RegistryError};
