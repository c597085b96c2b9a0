//! Concept-indexed output types.
//!
//! - [`FlattenedFiling`] - One observation with its unit pulled alongside
//! - [`ConceptRecord`] - A concept's metadata plus index-aligned sentences
//!   and filings
//! - [`OutputDocument`] - Concept records keyed by tag

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::document::{FactValue, Observation};
use crate::error::FactsError;
use crate::period::FiscalPeriod;

/// A single observation flattened together with its unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlattenedFiling {
    /// Unit the value is expressed in.
    pub unit: String,
    /// Reported value.
    pub value: FactValue,
    /// Fiscal year.
    pub fiscal_year: Option<i32>,
    /// Fiscal period.
    pub fiscal_period: Option<FiscalPeriod>,
    /// Form type (e.g. `10-K`).
    pub form_type: String,
    /// Filing date.
    pub date_filed: NaiveDate,
}

impl FlattenedFiling {
    /// Flattens an observation reported under `unit`.
    #[must_use]
    pub fn from_observation(unit: &str, observation: &Observation) -> Self {
        Self {
            unit: unit.to_string(),
            value: observation.value,
            fiscal_year: observation.fiscal_year,
            fiscal_period: observation.fiscal_period.clone(),
            form_type: observation.form_type.clone(),
            date_filed: observation.date_filed,
        }
    }
}

/// A concept with its metadata, filings and one sentence per filing.
///
/// `facts()[i]` always describes `filings()[i]`: the two sequences only grow
/// together through [`ConceptRecord::push`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireConceptRecord")]
pub struct ConceptRecord {
    tag: String,
    taxonomy: String,
    label: Option<String>,
    description: Option<String>,
    facts: Vec<String>,
    filings: Vec<FlattenedFiling>,
}

#[derive(Deserialize)]
struct WireConceptRecord {
    tag: String,
    taxonomy: String,
    label: Option<String>,
    description: Option<String>,
    facts: Vec<String>,
    filings: Vec<FlattenedFiling>,
}

impl TryFrom<WireConceptRecord> for ConceptRecord {
    type Error = FactsError;

    fn try_from(wire: WireConceptRecord) -> Result<Self, Self::Error> {
        if wire.facts.len() != wire.filings.len() {
            return Err(FactsError::MalformedDocument(format!(
                "concept {} has {} facts but {} filings",
                wire.tag,
                wire.facts.len(),
                wire.filings.len()
            )));
        }
        Ok(Self {
            tag: wire.tag,
            taxonomy: wire.taxonomy,
            label: wire.label,
            description: wire.description,
            facts: wire.facts,
            filings: wire.filings,
        })
    }
}

impl ConceptRecord {
    /// Creates a record with metadata and no filings yet.
    #[must_use]
    pub fn new(
        tag: impl Into<String>,
        taxonomy: impl Into<String>,
        label: Option<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            tag: tag.into(),
            taxonomy: taxonomy.into(),
            label,
            description,
            facts: Vec::new(),
            filings: Vec::new(),
        }
    }

    /// Pre-allocates room for `additional` filings.
    pub fn reserve(&mut self, additional: usize) {
        self.facts.reserve(additional);
        self.filings.reserve(additional);
    }

    /// Appends a filing together with the sentence describing it.
    pub fn push(&mut self, fact: String, filing: FlattenedFiling) {
        self.facts.push(fact);
        self.filings.push(filing);
    }

    /// Returns the concept tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the taxonomy the concept was taken from.
    #[must_use]
    pub fn taxonomy(&self) -> &str {
        &self.taxonomy
    }

    /// Returns the concept label.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the concept description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the generated sentences.
    #[must_use]
    pub fn facts(&self) -> &[String] {
        &self.facts
    }

    /// Returns the flattened filings.
    #[must_use]
    pub fn filings(&self) -> &[FlattenedFiling] {
        &self.filings
    }

    /// Returns the number of filings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filings.len()
    }

    /// Returns true if the concept has no filings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filings.is_empty()
    }

    /// Iterates over (sentence, filing) pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &FlattenedFiling)> {
        self.facts.iter().map(String::as_str).zip(&self.filings)
    }
}

/// Concept records keyed by tag, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputDocument {
    concepts: IndexMap<String, ConceptRecord>,
}

impl OutputDocument {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record under its tag.
    ///
    /// A record already stored under the same tag is replaced and returned;
    /// the tag keeps its original position.
    pub fn insert(&mut self, record: ConceptRecord) -> Option<ConceptRecord> {
        self.concepts.insert(record.tag.clone(), record)
    }

    /// Returns the record for `tag`.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&ConceptRecord> {
        self.concepts.get(tag)
    }

    /// Returns true if a record exists for `tag`.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.concepts.contains_key(tag)
    }

    /// Returns the number of concepts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    /// Returns true if there are no concepts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// Returns the total number of filings across all concepts.
    #[must_use]
    pub fn filing_count(&self) -> usize {
        self.concepts.values().map(ConceptRecord::len).sum()
    }

    /// Iterates over the tags in insertion order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.concepts.keys().map(String::as_str)
    }

    /// Iterates over the records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &ConceptRecord> {
        self.concepts.values()
    }
}
