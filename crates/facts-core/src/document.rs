//! The raw company facts document as served by EDGAR.
//!
//! The wire shape is `facts[taxonomy][tag] -> {label, description, units}`
//! where `units` maps a unit name to the list of filed observations. Key
//! order of every JSON object is kept, so iteration over a [`CompanyFacts`]
//! mirrors the source document.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::{FactsError, Result};
use crate::period::FiscalPeriod;

/// Observations keyed by unit name (e.g. `USD`, `shares`).
pub type UnitObservations = IndexMap<String, Vec<Observation>>;

/// Concepts keyed by tag within one taxonomy.
pub type TaxonomyConcepts = IndexMap<String, RawConcept>;

/// A reported numeric value.
///
/// EDGAR values are overwhelmingly whole numbers, but some concepts (per-share
/// amounts, ratios) carry a fractional part.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FactValue {
    /// Whole-number magnitude.
    Integer(i64),
    /// Value with a fractional part.
    Decimal(f64),
}

impl FactValue {
    /// Returns the value as `f64`.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Integer(v) => v as f64,
            Self::Decimal(v) => v,
        }
    }
}

impl fmt::Display for FactValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Decimal(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for FactValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for FactValue {
    fn from(v: f64) -> Self {
        Self::Decimal(v)
    }
}

/// One filed data point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Reported value.
    #[serde(rename = "val")]
    pub value: FactValue,
    /// Fiscal year; EDGAR sends `null` for some older filings.
    #[serde(rename = "fy", deserialize_with = "required_nullable")]
    pub fiscal_year: Option<i32>,
    /// Fiscal period; `null` alongside a `null` fiscal year.
    #[serde(rename = "fp", deserialize_with = "required_nullable")]
    pub fiscal_period: Option<FiscalPeriod>,
    /// Form the value was filed under (e.g. `10-K`).
    #[serde(rename = "form")]
    pub form_type: String,
    /// Date the filing was made.
    #[serde(rename = "filed")]
    pub date_filed: NaiveDate,
}

/// One reporting concept with its metadata and observations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawConcept {
    /// Human-readable label.
    #[serde(deserialize_with = "required_nullable")]
    pub label: Option<String>,
    /// Longer description.
    #[serde(deserialize_with = "required_nullable")]
    pub description: Option<String>,
    /// Observations grouped by unit, in document order.
    pub units: UnitObservations,
}

impl RawConcept {
    /// Returns the total number of observations across all units.
    #[must_use]
    pub fn observation_count(&self) -> usize {
        self.units.values().map(Vec::len).sum()
    }
}

/// A validated company facts document.
///
/// Construct with [`CompanyFacts::from_slice`], [`CompanyFacts::from_json`]
/// or [`CompanyFacts::from_value`]; each rejects a document without a
/// top-level `facts` section.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyFacts {
    #[serde(skip_serializing_if = "Option::is_none")]
    cik: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    entity_name: Option<String>,
    facts: IndexMap<String, TaxonomyConcepts>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireCompanyFacts {
    #[serde(default)]
    cik: Option<u64>,
    #[serde(default)]
    entity_name: Option<String>,
    #[serde(default)]
    facts: Option<IndexMap<String, TaxonomyConcepts>>,
}

impl TryFrom<WireCompanyFacts> for CompanyFacts {
    type Error = FactsError;

    fn try_from(wire: WireCompanyFacts) -> Result<Self> {
        let facts = wire.facts.ok_or_else(|| {
            FactsError::MalformedDocument("missing top-level `facts` section".to_string())
        })?;
        Ok(Self {
            cik: wire.cik,
            entity_name: wire.entity_name,
            facts,
        })
    }
}

impl CompanyFacts {
    /// Parses a document from raw JSON bytes.
    ///
    /// # Errors
    /// Returns [`FactsError::MalformedDocument`] if the JSON does not have the
    /// company facts shape.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let wire: WireCompanyFacts = serde_json::from_slice(bytes).map_err(malformed)?;
        wire.try_into()
    }

    /// Parses a document from a JSON string.
    ///
    /// # Errors
    /// Returns [`FactsError::MalformedDocument`] if the JSON does not have the
    /// company facts shape.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_slice(json.as_bytes())
    }

    /// Builds a document from an already parsed JSON value.
    ///
    /// # Errors
    /// Returns [`FactsError::MalformedDocument`] if the value does not have
    /// the company facts shape.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let wire: WireCompanyFacts = serde_json::from_value(value).map_err(malformed)?;
        wire.try_into()
    }

    /// Returns the CIK the document was published under, if present.
    #[must_use]
    pub const fn cik(&self) -> Option<u64> {
        self.cik
    }

    /// Returns the entity name, if present.
    #[must_use]
    pub fn entity_name(&self) -> Option<&str> {
        self.entity_name.as_deref()
    }

    /// Returns the full taxonomy map.
    #[must_use]
    pub const fn facts(&self) -> &IndexMap<String, TaxonomyConcepts> {
        &self.facts
    }

    /// Returns the concept stored at `facts[taxonomy][tag]`.
    #[must_use]
    pub fn concept(&self, taxonomy: &str, tag: &str) -> Option<&RawConcept> {
        self.facts.get(taxonomy)?.get(tag)
    }

    /// Returns the total number of concepts across all taxonomies.
    #[must_use]
    pub fn concept_count(&self) -> usize {
        self.facts.values().map(IndexMap::len).sum()
    }
}

fn malformed(e: serde_json::Error) -> FactsError {
    FactsError::MalformedDocument(e.to_string())
}

/// Deserializes a field whose key must be present but whose value may be
/// `null`.
fn required_nullable<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}
