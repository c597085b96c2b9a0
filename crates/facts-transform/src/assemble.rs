//! Document assembly.

use facts_core::{CompanyFacts, OutputDocument, Result};
use tracing::debug;

use crate::concept::build_concept;
use crate::tags::{TagIndex, enumerate_tags, tag_count};

/// Builds the concept-indexed document for every tag in `tags`.
///
/// Records are keyed by tag alone. When a tag appears under more than one
/// taxonomy, the taxonomy enumerated last replaces the earlier record while
/// the tag keeps its first position in the output.
///
/// # Errors
/// Returns [`facts_core::FactsError::MissingConcept`] if a tag in `tags` is
/// not present in `doc`.
pub fn assemble(doc: &CompanyFacts, tags: &TagIndex) -> Result<OutputDocument> {
    let mut output = OutputDocument::new();

    for (taxonomy, taxonomy_tags) in tags {
        for tag in taxonomy_tags {
            let record = build_concept(doc, tag, taxonomy)?;
            if let Some(previous) = output.insert(record) {
                debug!(
                    tag = %tag,
                    replaced = previous.taxonomy(),
                    taxonomy = %taxonomy,
                    "Tag present in several taxonomies, keeping the later one"
                );
            }
        }
    }

    debug!(
        tags = tag_count(tags),
        concepts = output.len(),
        filings = output.filing_count(),
        "Assembled output document"
    );
    Ok(output)
}

/// Enumerates the tags of `doc` and assembles the output document.
///
/// # Errors
/// See [`assemble`].
pub fn transform(doc: &CompanyFacts) -> Result<OutputDocument> {
    let tags = enumerate_tags(doc);
    assemble(doc, &tags)
}
