//! Tag enumeration.

use facts_core::CompanyFacts;
use indexmap::IndexMap;

/// Concept tags grouped by taxonomy, in document order.
pub type TagIndex = IndexMap<String, Vec<String>>;

/// Lists every (taxonomy, tag) pair present in `doc`.
///
/// Taxonomies and tags come out in the order they appear in the source JSON.
#[must_use]
pub fn enumerate_tags(doc: &CompanyFacts) -> TagIndex {
    doc.facts()
        .iter()
        .map(|(taxonomy, concepts)| (taxonomy.clone(), concepts.keys().cloned().collect()))
        .collect()
}

/// Returns the number of tags across all taxonomies.
#[must_use]
pub fn tag_count(tags: &TagIndex) -> usize {
    tags.values().map(Vec::len).sum()
}
