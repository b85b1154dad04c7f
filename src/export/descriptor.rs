//! Normalized codec descriptor records.

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::registry::{Category, Registry};
use crate::schema::{SizeResolver, SizeSchema};

/// Category tag emitted in the output document.
///
/// Note the external spelling: count-category records are tagged
/// `"counter"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryTag {
    Matter,
    Indexer,
    Counter,
}

impl From<Category> for CategoryTag {
    fn from(category: Category) -> Self {
        match category {
            Category::Primitive => CategoryTag::Matter,
            Category::Indexed => CategoryTag::Indexer,
            Category::Count => CategoryTag::Counter,
        }
    }
}

/// One flat record of the exported code table.
///
/// Size fields a category does not define serialize as JSON null, as do all
/// five for a code whose size is computed dynamically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecDescriptor {
    pub name: String,
    pub code: String,
    #[serde(rename = "type")]
    pub tag: CategoryTag,
    pub hs: Option<u32>,
    pub fs: Option<u32>,
    pub ss: Option<u32>,
    pub ls: Option<u32>,
    pub xs: Option<u32>,
}

impl CodecDescriptor {
    /// Merge a registry pair and its resolved sizes into one record.
    pub fn new(name: &str, code: &str, category: Category, sizes: SizeSchema) -> Self {
        Self {
            name: name.to_string(),
            code: code.to_string(),
            tag: category.into(),
            hs: sizes.hs,
            fs: sizes.fs,
            ss: sizes.ss,
            ls: sizes.ls,
            xs: sizes.xs,
        }
    }
}

/// Records for one registry, enumerator order preserved.
pub fn normalize(registry: &Registry, resolver: &SizeResolver) -> Vec<CodecDescriptor> {
    let category = registry.category();
    registry
        .entries()
        .map(|(name, code)| {
            CodecDescriptor::new(name, code, category, resolver.resolve(category, code))
        })
        .collect()
}

/// Run the full enumerate → resolve → normalize pass over the built-in
/// registries, in fixed category order: matter, then indexer, then counter.
pub fn build_descriptors() -> Result<Vec<CodecDescriptor>, RegistryError> {
    let resolver = SizeResolver::new()?;
    let mut records = Vec::new();
    for category in Category::ALL {
        let registry = Registry::load(category)?;
        records.extend(normalize(&registry, &resolver));
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_tag_serialization() {
        let json =
            serde_json::to_string(&CategoryTag::Matter).expect("serialization should succeed");
        assert_eq!(json, "\"matter\"");

        let json =
            serde_json::to_string(&CategoryTag::Counter).expect("serialization should succeed");
        assert_eq!(json, "\"counter\"");
    }

    #[test]
    fn test_count_category_is_tagged_counter() {
        assert_eq!(CategoryTag::from(Category::Count), CategoryTag::Counter);
    }

    #[test]
    fn test_descriptor_serializes_in_wire_order() {
        let descriptor = CodecDescriptor::new(
            "Ed25519",
            "A",
            Category::Primitive,
            SizeSchema {
                hs: Some(1),
                fs: Some(44),
                ss: Some(0),
                ls: Some(0),
                xs: Some(0),
            },
        );

        let json = serde_json::to_string(&descriptor).expect("serialization should succeed");
        assert_eq!(
            json,
            r#"{"name":"Ed25519","code":"A","type":"matter","hs":1,"fs":44,"ss":0,"ls":0,"xs":0}"#
        );
    }

    #[test]
    fn test_absent_sizes_serialize_as_null() {
        let descriptor =
            CodecDescriptor::new("Mystery", "zz", Category::Indexed, SizeSchema::default());

        let json = serde_json::to_string(&descriptor).expect("serialization should succeed");
        assert_eq!(
            json,
            r#"{"name":"Mystery","code":"zz","type":"indexer","hs":null,"fs":null,"ss":null,"ls":null,"xs":null}"#
        );
    }

    #[test]
    fn test_normalize_preserves_registry_order() {
        let resolver = SizeResolver::new().expect("resolver should build");
        let registry = Registry::load(Category::Count).expect("load should succeed");

        let records = normalize(&registry, &resolver);
        assert_eq!(records.len(), registry.len());
        for (record, (name, code)) in records.iter().zip(registry.entries()) {
            assert_eq!(record.name, name);
            assert_eq!(record.code, code);
            assert_eq!(record.tag, CategoryTag::Counter);
        }
    }

    #[test]
    fn test_normalize_unknown_code_yields_all_null() {
        let resolver = SizeResolver::new().expect("resolver should build");
        let registry = Registry::from_table(Category::Primitive, &[("Mystery", "zzz")])
            .expect("load should succeed");

        let records = normalize(&registry, &resolver);
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.hs, None);
        assert_eq!(record.fs, None);
        assert_eq!(record.ss, None);
        assert_eq!(record.ls, None);
        assert_eq!(record.xs, None);
    }

    #[test]
    fn test_empty_registry_yields_no_records() {
        let resolver = SizeResolver::new().expect("resolver should build");
        let registry =
            Registry::from_table(Category::Indexed, &[]).expect("empty table should load");

        assert!(normalize(&registry, &resolver).is_empty());
    }

    #[test]
    fn test_build_descriptors_concatenates_categories() {
        let records = build_descriptors().expect("build should succeed");

        let total: usize = Category::ALL
            .iter()
            .map(|&c| Registry::load(c).expect("load should succeed").len())
            .sum();
        assert_eq!(records.len(), total);
    }
}
