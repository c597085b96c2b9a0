#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/company-facts/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Core types and traits
pub use facts_core::*;

// Transformation pipeline
pub use facts_transform::{
    TagIndex, assemble, build_concept, enumerate_tags, filings_frame, make_fact, transform,
};

// Providers
#[cfg(feature = "edgar")]
pub use facts_edgar::{EdgarConfig, EdgarProvider, UserAgent};

pub mod output;

mod runner;
pub use runner::{FactsRunner, RunSummary};
