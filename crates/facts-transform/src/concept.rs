//! Per-concept record building.

use facts_core::{CompanyFacts, ConceptRecord, FactsError, FlattenedFiling, Result};

use crate::sentence::describe_filing;

/// Builds the record for `facts[taxonomy][tag]`.
///
/// Walks every unit and every observation in document order, flattening each
/// observation and rendering its sentence in the same step. Nothing is sorted,
/// filtered or deduplicated: repeated or amended filings appear as often as
/// the source lists them.
///
/// # Errors
/// Returns [`FactsError::MissingConcept`] if the document has no such concept.
pub fn build_concept(doc: &CompanyFacts, tag: &str, taxonomy: &str) -> Result<ConceptRecord> {
    let concept = doc
        .concept(taxonomy, tag)
        .ok_or_else(|| FactsError::MissingConcept {
            taxonomy: taxonomy.to_string(),
            tag: tag.to_string(),
        })?;

    let mut record = ConceptRecord::new(
        tag,
        taxonomy,
        concept.label.clone(),
        concept.description.clone(),
    );
    record.reserve(concept.observation_count());

    for (unit, observations) in &concept.units {
        for observation in observations {
            let filing = FlattenedFiling::from_observation(unit, observation);
            let fact = describe_filing(tag, &filing);
            record.push(fact, filing);
        }
    }

    Ok(record)
}
