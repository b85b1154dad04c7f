//! Size-schema resolution for codec codes.
//!
//! Every fixed-layout code carries a size schema: hard size (`hs`), soft
//! size (`ss`), full size (`fs`), lead size (`ls`), and extra size (`xs`),
//! the fixed-width fields that make delimiter-free parsing possible. Which
//! fields exist depends on the category; the resolver flattens all three
//! layouts into one uniform [`SizeSchema`] shape with nulls for whatever a
//! category does not define.

use crate::error::RegistryError;
use crate::registry::{counter, indexer, matter, Category};

/// Size schema entry for a primitive material code.
///
/// `fs` is `None` for variable-size codes (the StrB64/Bytes families),
/// whose full size is computed from the soft count at encode time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatterSizage {
    pub hs: u32,
    pub ss: u32,
    pub xs: u32,
    pub fs: Option<u32>,
    pub ls: u32,
}

/// Size schema entry for an indexed signature code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexerSizage {
    pub hs: u32,
    pub ss: u32,
    pub fs: Option<u32>,
    pub ls: u32,
}

/// Size schema entry for a count code. Count codes are always fully
/// fixed-width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterSizage {
    pub hs: u32,
    pub ss: u32,
    pub fs: u32,
}

/// The uniform resolved shape merged into descriptor records.
///
/// Fields a category does not define, and every field of a code with no
/// size-table entry, are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeSchema {
    pub hs: Option<u32>,
    pub fs: Option<u32>,
    pub ss: Option<u32>,
    pub ls: Option<u32>,
    pub xs: Option<u32>,
}

/// Genus version of the count code table consulted by the exporter.
pub const CURRENT_GENUS_VERSION: (u16, u16) = (1, 0);

/// Count-code size table for a genus version.
///
/// The count tables are conceptually nested: version first, then code. Only
/// 1.0 is defined today; new versions slot in as further match arms.
pub fn counter_sizes(
    major: u16,
    minor: u16,
) -> Result<&'static [(&'static str, CounterSizage)], RegistryError> {
    match (major, minor) {
        (1, 0) => Ok(counter::COUNTER_SIZES_V1_0),
        _ => Err(RegistryError::UnknownVersion { major, minor }),
    }
}

fn find<'a, T>(table: &'a [(&'static str, T)], code: &str) -> Option<&'a T> {
    table.iter().find(|(c, _)| *c == code).map(|(_, entry)| entry)
}

/// Resolves codes to their size schemas.
///
/// Construction fails if the count-code table for the consulted genus
/// version is absent; resolution itself never fails. A code missing from
/// its category's table resolves to all-`None` fields, which signals a
/// dynamically sized code rather than an error.
pub struct SizeResolver {
    counter_sizes: &'static [(&'static str, CounterSizage)],
}

impl SizeResolver {
    /// Resolver over the current genus version.
    pub fn new() -> Result<Self, RegistryError> {
        let (major, minor) = CURRENT_GENUS_VERSION;
        Self::for_genus_version(major, minor)
    }

    /// Resolver over an explicit genus version of the count tables.
    pub fn for_genus_version(major: u16, minor: u16) -> Result<Self, RegistryError> {
        let counter_sizes = counter_sizes(major, minor)?;
        Ok(Self { counter_sizes })
    }

    /// Resolve the size schema for `code` within `category`.
    pub fn resolve(&self, category: Category, code: &str) -> SizeSchema {
        match category {
            Category::Primitive => find(matter::MATTER_SIZES, code)
                .map(|entry| SizeSchema {
                    hs: Some(entry.hs),
                    fs: entry.fs,
                    ss: Some(entry.ss),
                    ls: Some(entry.ls),
                    xs: Some(entry.xs),
                })
                .unwrap_or_default(),
            Category::Indexed => find(indexer::INDEXER_SIZES, code)
                .map(|entry| SizeSchema {
                    hs: Some(entry.hs),
                    fs: entry.fs,
                    ss: Some(entry.ss),
                    ls: Some(entry.ls),
                    xs: None,
                })
                .unwrap_or_default(),
            Category::Count => find(self.counter_sizes, code)
                .map(|entry| SizeSchema {
                    hs: Some(entry.hs),
                    fs: Some(entry.fs),
                    ss: Some(entry.ss),
                    ls: None,
                    xs: None,
                })
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;

    fn resolver() -> SizeResolver {
        SizeResolver::new().expect("current genus version should resolve")
    }

    #[test]
    fn test_resolve_fixed_matter_code() {
        let sizes = resolver().resolve(Category::Primitive, "A");
        assert_eq!(
            sizes,
            SizeSchema {
                hs: Some(1),
                fs: Some(44),
                ss: Some(0),
                ls: Some(0),
                xs: Some(0),
            }
        );
    }

    #[test]
    fn test_resolve_variable_matter_code() {
        // Variable-size codes are table hits with a null full size.
        let sizes = resolver().resolve(Category::Primitive, "4A");
        assert_eq!(sizes.hs, Some(2));
        assert_eq!(sizes.ss, Some(2));
        assert_eq!(sizes.fs, None);
        assert_eq!(sizes.ls, Some(0));
        assert_eq!(sizes.xs, Some(0));
    }

    #[test]
    fn test_resolve_miss_is_all_null() {
        let sizes = resolver().resolve(Category::Primitive, "zzz");
        assert_eq!(sizes, SizeSchema::default());
    }

    #[test]
    fn test_indexed_codes_never_carry_xs() {
        let resolver = resolver();
        let registry = Registry::load(Category::Indexed).expect("load should succeed");
        for (name, code) in registry.entries() {
            let sizes = resolver.resolve(Category::Indexed, code);
            assert_eq!(sizes.xs, None, "{name} carries xs");
            assert!(sizes.hs.is_some(), "{name} has no size entry");
        }
    }

    #[test]
    fn test_count_codes_never_carry_ls_or_xs() {
        let resolver = resolver();
        let registry = Registry::load(Category::Count).expect("load should succeed");
        for (name, code) in registry.entries() {
            let sizes = resolver.resolve(Category::Count, code);
            assert_eq!(sizes.ls, None, "{name} carries ls");
            assert_eq!(sizes.xs, None, "{name} carries xs");
            assert!(sizes.fs.is_some(), "{name} has no fixed full size");
        }
    }

    #[test]
    fn test_every_matter_code_has_a_size_entry() {
        let resolver = resolver();
        let registry = Registry::load(Category::Primitive).expect("load should succeed");
        for (name, code) in registry.entries() {
            let sizes = resolver.resolve(Category::Primitive, code);
            assert!(sizes.hs.is_some(), "{name} has no size entry");
        }
    }

    #[test]
    fn test_unknown_genus_version_is_fatal() {
        let result = SizeResolver::for_genus_version(2, 0);
        assert!(matches!(
            result,
            Err(RegistryError::UnknownVersion { major: 2, minor: 0 })
        ));
    }

    #[test]
    fn test_extra_size_only_on_padded_tags() {
        // Tag1/Tag5/Tag9 pre-pad their soft part with one filler character.
        let resolver = resolver();
        for (code, xs) in [("0J", 1), ("0K", 0), ("0L", 1), ("0M", 0)] {
            let sizes = resolver.resolve(Category::Primitive, code);
            assert_eq!(sizes.xs, Some(xs), "unexpected xs for {code}");
        }
    }
}
