#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/company-facts/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types for SEC company facts.
//!
//! This crate provides the foundational abstractions shared by the workspace:
//!
//! - [`CompanyFacts`](document::CompanyFacts) - Validated raw disclosure document
//! - [`ConceptRecord`](record::ConceptRecord) - Concept metadata with aligned sentences and filings
//! - [`OutputDocument`](record::OutputDocument) - Concept records keyed by tag
//! - [`CompanyDirectory`](company::CompanyDirectory) - Ticker reference list
//! - [`CompanyFactsProvider`](provider::CompanyFactsProvider) - Retrieval abstraction

/// Company identifiers and the ticker reference list.
pub mod company;
/// The raw company facts document.
pub mod document;
/// Error types for company facts operations.
pub mod error;
/// Fiscal period designations.
pub mod period;
/// Provider trait for fetching company facts.
pub mod provider;
/// Concept-indexed output types.
pub mod record;

// Re-export commonly used items at crate root
pub use company::{Cik, Company, CompanyDirectory};
pub use document::{CompanyFacts, FactValue, Observation, RawConcept};
pub use error::{FactsError, Result};
pub use period::FiscalPeriod;
pub use provider::CompanyFactsProvider;
pub use record::{ConceptRecord, FlattenedFiling, OutputDocument};
