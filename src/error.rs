//! Error types for the exporter.
//!
//! Registry loading and JSON output each get their own error enum. A size
//! lookup that finds no entry is not represented here at all: it resolves to
//! all-null fields and processing continues.

use thiserror::Error;

use crate::registry::Category;

/// Errors that can occur while loading a code registry.
///
/// Every variant is fatal: the run aborts before any output is produced.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("No count code size table defined for genus version {major}.{minor}")]
    UnknownVersion { major: u16, minor: u16 },

    #[error("Entry with empty name or code in {category} registry")]
    EmptyEntry { category: Category },

    #[error("Duplicate name '{name}' in {category} registry")]
    DuplicateName { category: Category, name: String },

    #[error("Duplicate code '{code}' in {category} registry")]
    DuplicateCode { category: Category, code: String },
}

/// Errors that can occur while rendering or writing the descriptor list.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
