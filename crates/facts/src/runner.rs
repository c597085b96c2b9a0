//! Orchestration of a single company facts run.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use facts_core::{Cik, Company, CompanyFactsProvider, FactsError, OutputDocument, Result};
use facts_transform::transform;

use crate::output::{self, DEFAULT_OUTPUT_DIR};

/// Outcome of a successful [`FactsRunner::run_for_ticker`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Ticker as requested.
    pub ticker: String,
    /// Resolved CIK.
    pub cik: Cik,
    /// Number of concept records written.
    pub concepts: usize,
    /// Number of filings across all records.
    pub filings: usize,
    /// Path of the output document.
    pub path: PathBuf,
    /// Path of the Parquet sidecar, when one was written.
    pub parquet_path: Option<PathBuf>,
}

/// Resolves a ticker, fetches its company facts, transforms them and writes
/// the output document.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use facts::{EdgarConfig, EdgarProvider, FactsRunner};
///
/// let provider = EdgarProvider::new(EdgarConfig::from_env()?)?;
/// let runner = FactsRunner::new(Arc::new(provider)).with_output_dir("out");
/// let summary = runner.run_for_ticker("AAPL").await?;
/// println!("{} concepts written to {}", summary.concepts, summary.path.display());
/// ```
pub struct FactsRunner {
    provider: Arc<dyn CompanyFactsProvider>,
    output_dir: PathBuf,
    parquet: bool,
}

impl std::fmt::Debug for FactsRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactsRunner")
            .field("provider", &self.provider.name())
            .field("output_dir", &self.output_dir)
            .field("parquet", &self.parquet)
            .finish()
    }
}

impl FactsRunner {
    /// Create a runner writing to the default output directory.
    #[must_use]
    pub fn new(provider: Arc<dyn CompanyFactsProvider>) -> Self {
        debug!(provider = provider.name(), "Creating runner");
        Self {
            provider,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            parquet: false,
        }
    }

    /// Set the directory output documents are written to.
    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Also write a Parquet sidecar next to each output document.
    #[must_use]
    pub const fn with_parquet(mut self, parquet: bool) -> Self {
        self.parquet = parquet;
        self
    }

    /// Returns the output directory.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Resolve `ticker` against the provider's reference list.
    ///
    /// # Errors
    /// Returns [`FactsError::InvalidParameter`] for a blank ticker,
    /// [`FactsError::NoData`] if the reference list is unavailable and
    /// [`FactsError::NotFound`] if the ticker is not listed.
    #[instrument(skip(self), fields(provider = self.provider.name()))]
    pub async fn resolve(&self, ticker: &str) -> Result<Company> {
        if ticker.trim().is_empty() {
            return Err(FactsError::InvalidParameter("Empty ticker".to_string()));
        }

        let directory = self
            .provider
            .company_directory()
            .await?
            .ok_or_else(|| FactsError::NoData("company tickers".to_string()))?;

        let company = directory
            .resolve(ticker)
            .cloned()
            .ok_or_else(|| FactsError::NotFound(ticker.to_string()))?;
        debug!(cik = %company.identifier, name = %company.name, "Resolved ticker");
        Ok(company)
    }

    /// Resolve `ticker` and build its output document without writing it.
    ///
    /// # Errors
    /// Any resolution error, [`FactsError::NoData`] if the company facts are
    /// unavailable, or a transformation error.
    #[instrument(skip(self), fields(provider = self.provider.name()))]
    pub async fn fetch(&self, ticker: &str) -> Result<(Company, OutputDocument)> {
        let company = self.resolve(ticker).await?;

        let raw = self
            .provider
            .company_facts(&company.identifier)
            .await?
            .ok_or_else(|| FactsError::NoData(format!("company facts for CIK {}", company.identifier)))?;

        let doc = transform(&raw)?;
        debug!(concepts = doc.len(), filings = doc.filing_count(), "Transformed company facts");
        Ok((company, doc))
    }

    /// Resolve, fetch, transform and write the output document for `ticker`.
    ///
    /// The document is fully built before anything is written.
    ///
    /// # Errors
    /// Any error from [`fetch`](Self::fetch), or
    /// [`FactsError::OutputWriteFailure`] if the output cannot be written.
    #[instrument(skip(self), fields(provider = self.provider.name()))]
    pub async fn run_for_ticker(&self, ticker: &str) -> Result<RunSummary> {
        let (company, doc) = self.fetch(ticker).await?;

        let path = output::output_path(&self.output_dir, ticker);
        output::write_output_document(&path, &doc).await?;

        let parquet_path = if self.parquet {
            let sidecar = output::parquet_path(&path);
            output::write_parquet(&sidecar, &doc)?;
            Some(sidecar)
        } else {
            None
        };

        let summary = RunSummary {
            ticker: ticker.to_string(),
            cik: company.identifier,
            concepts: doc.len(),
            filings: doc.filing_count(),
            path,
            parquet_path,
        };
        info!(
            cik = %summary.cik,
            concepts = summary.concepts,
            filings = summary.filings,
            path = %summary.path.display(),
            "Run complete"
        );
        Ok(summary)
    }
}
