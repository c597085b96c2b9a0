#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/company-facts/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Pure transformation from raw company facts to a concept-indexed document.
//!
//! The pipeline runs in four steps, none of which touch the network or the
//! filesystem:
//!
//! - [`enumerate_tags`](tags::enumerate_tags) - List (taxonomy, tag) pairs
//! - [`make_fact`](sentence::make_fact) - Render one filing as a sentence
//! - [`build_concept`](concept::build_concept) - Build one concept record
//! - [`assemble`](assemble::assemble) - Build the whole output document
//!
//! # Example
//!
//! ```
//! use facts_core::CompanyFacts;
//! use facts_transform::transform;
//!
//! let doc = CompanyFacts::from_json(r#"{"facts": {"us-gaap": {"AssetsCurrent": {
//!     "label": "Current Assets",
//!     "description": "Total current assets",
//!     "units": {"USD": [{"val": 5000000, "fy": 2023, "fp": "FY", "form": "10-K", "filed": "2024-02-01"}]}
//! }}}}"#)?;
//!
//! let output = transform(&doc)?;
//! assert_eq!(
//!     output.get("AssetsCurrent").unwrap().facts()[0],
//!     "The reported 'Assets Current' in 2023 (Full Year) filed in a 10-K form on 2024-02-01 was 5,000,000 USD."
//! );
//! # Ok::<(), facts_core::FactsError>(())
//! ```

/// Document assembly.
pub mod assemble;
/// Per-concept record building.
pub mod concept;
/// Tabular view of an output document.
pub mod frame;
/// Sentence generation for individual filings.
pub mod sentence;
/// Tag enumeration.
pub mod tags;

pub use assemble::{assemble, transform};
pub use concept::build_concept;
pub use frame::filings_frame;
pub use sentence::{describe_filing, format_value, humanize_tag, make_fact, normalize_period};
pub use tags::{TagIndex, enumerate_tags};
