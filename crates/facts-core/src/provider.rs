//! Provider trait for retrieving company facts.
//!
//! [`CompanyFactsProvider`] is the seam between the network and the pure
//! transformation pipeline. Implementations report a non-success response as
//! `Ok(None)` and reserve `Err` for transport and decoding failures.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    company::{Cik, CompanyDirectory},
    document::CompanyFacts,
    error::Result,
};

/// Source of company reference data and raw company facts documents.
#[async_trait]
pub trait CompanyFactsProvider: Send + Sync + Debug {
    /// Returns the name of this provider (e.g., "SEC EDGAR").
    fn name(&self) -> &str;

    /// Fetches the ticker reference list.
    ///
    /// Returns `Ok(None)` when the service answers with a non-success status.
    async fn company_directory(&self) -> Result<Option<CompanyDirectory>>;

    /// Fetches the raw company facts document for `cik`.
    ///
    /// Returns `Ok(None)` when the service answers with a non-success status.
    async fn company_facts(&self, cik: &Cik) -> Result<Option<CompanyFacts>>;
}
