//! Code registries for the three CESR code categories.
//!
//! Each category ships a static table of `(name, code)` pairs in definition
//! order. A [`Registry`] validates its table on load and enumerates the
//! pairs, skipping reserved bookkeeping names.

pub mod counter;
pub mod indexer;
pub mod matter;

pub use counter::COUNTER_CODES;
pub use indexer::INDEXER_CODES;
pub use matter::MATTER_CODES;

use std::collections::HashSet;
use std::fmt;

use crate::error::RegistryError;

/// A registry code table: `(name, code)` pairs in definition order.
pub type CodeTable = &'static [(&'static str, &'static str)];

/// The three code categories, in the fixed order the exporter emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Primitive material codes (keys, seeds, digests, signatures, tags).
    Primitive,
    /// Indexed signature codes carrying a position within a signing group.
    Indexed,
    /// Version-qualified count codes delimiting composed-stream groups.
    Count,
}

impl Category {
    /// Export order: primitive, then indexed, then count.
    pub const ALL: [Category; 3] = [Category::Primitive, Category::Indexed, Category::Count];

    /// The built-in code table for this category.
    pub fn code_table(&self) -> CodeTable {
        match self {
            Category::Primitive => MATTER_CODES,
            Category::Indexed => INDEXER_CODES,
            Category::Count => COUNTER_CODES,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Primitive => write!(f, "primitive"),
            Category::Indexed => write!(f, "indexed"),
            Category::Count => write!(f, "count"),
        }
    }
}

/// A validated code registry for one category.
pub struct Registry {
    category: Category,
    entries: Vec<(&'static str, &'static str)>,
}

impl Registry {
    /// Load and validate the built-in registry for a category.
    pub fn load(category: Category) -> Result<Self, RegistryError> {
        Self::from_table(category, category.code_table())
    }

    /// Build a registry from an explicit code table.
    ///
    /// Entries whose name starts with `_` are reserved bookkeeping rows and
    /// are skipped. An empty name or code, a duplicate name, or a duplicate
    /// code makes the table malformed.
    pub fn from_table(category: Category, table: CodeTable) -> Result<Self, RegistryError> {
        let mut names = HashSet::new();
        let mut codes = HashSet::new();
        let mut entries = Vec::with_capacity(table.len());

        for &(name, code) in table {
            if name.starts_with('_') {
                continue;
            }
            if name.is_empty() || code.is_empty() {
                return Err(RegistryError::EmptyEntry { category });
            }
            if !names.insert(name) {
                return Err(RegistryError::DuplicateName {
                    category,
                    name: name.to_string(),
                });
            }
            if !codes.insert(code) {
                return Err(RegistryError::DuplicateCode {
                    category,
                    code: code.to_string(),
                });
            }
            entries.push((name, code));
        }

        Ok(Self { category, entries })
    }

    /// The category this registry belongs to.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Enumerate `(name, code)` pairs in definition order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of enumerable codes in this registry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry enumerates no codes at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
