#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/company-facts/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! SEC EDGAR provider for company facts.
//!
//! This crate provides access to two EDGAR resources:
//!
//! - The company tickers reference list, normalized into a
//!   [`CompanyDirectory`] for CIK lookup
//! - The XBRL company facts document for a CIK
//!
//! Each call makes exactly one request with a bounded timeout. A non-success
//! status is logged and reported as `Ok(None)`; callers decide whether the
//! absence is fatal.
//!
//! # Example
//!
//! ```no_run
//! use facts_core::CompanyFactsProvider;
//! use facts_edgar::{EdgarConfig, EdgarProvider, UserAgent};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let user_agent = UserAgent::new("Jane", "Doe", "jane@example.com")?;
//!     let provider = EdgarProvider::new(EdgarConfig::new(user_agent))?;
//!
//!     let cik = provider.get_cik("AAPL").await?;
//!     if let Some(facts) = provider.company_facts(&cik).await? {
//!         println!("{} concepts", facts.concept_count());
//!     }
//!
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use facts_core::{
    Cik, Company, CompanyDirectory, CompanyFacts, CompanyFactsProvider, FactsError, Result,
};
use indexmap::IndexMap;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Provider configuration and request identity.
pub mod config;

pub use config::{EdgarConfig, UserAgent};

/// SEC EDGAR provider.
///
/// Fetches the company tickers list and company facts documents, identifying
/// itself with the configured [`UserAgent`].
#[derive(Debug)]
pub struct EdgarProvider {
    client: reqwest::Client,
    config: EdgarConfig,
}

impl EdgarProvider {
    /// Create a new EDGAR provider from `config`.
    ///
    /// # Errors
    /// Returns [`FactsError::Config`] if the HTTP client cannot be built.
    ///
    /// # Example
    /// ```
    /// use facts_edgar::{EdgarConfig, EdgarProvider, UserAgent};
    ///
    /// let user_agent = UserAgent::new("Jane", "Doe", "jane@example.com").unwrap();
    /// let provider = EdgarProvider::new(EdgarConfig::new(user_agent)).unwrap();
    /// ```
    pub fn new(config: EdgarConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent().to_string())
            .build()
            .map_err(|e| FactsError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Create a new EDGAR provider with a custom HTTP client.
    ///
    /// The configured user agent is still attached to every request.
    pub fn with_client(client: reqwest::Client, config: EdgarConfig) -> Self {
        Self { client, config }
    }

    /// Returns the provider configuration.
    #[must_use]
    pub const fn config(&self) -> &EdgarConfig {
        &self.config
    }

    /// Returns the company facts URL for `cik`.
    #[must_use]
    pub fn company_facts_url(&self, cik: &Cik) -> String {
        format!(
            "{}/api/xbrl/companyfacts/CIK{}.json",
            self.config.base_url(),
            cik
        )
    }

    /// Look up a company's CIK from its ticker symbol.
    ///
    /// Downloads the reference list and resolves `ticker` against it.
    ///
    /// # Errors
    /// Returns [`FactsError::NotFound`] if the ticker is not listed,
    /// [`FactsError::NoData`] if the reference list could not be retrieved,
    /// or a network/parse error.
    pub async fn get_cik(&self, ticker: &str) -> Result<Cik> {
        if ticker.trim().is_empty() {
            return Err(FactsError::InvalidParameter("Empty ticker".to_string()));
        }

        let directory = self
            .company_directory()
            .await?
            .ok_or_else(|| FactsError::NoData("company tickers".to_string()))?;

        let company = directory
            .resolve(ticker)
            .ok_or_else(|| FactsError::NotFound(ticker.to_string()))?;
        debug!("Found CIK {} for ticker {}", company.identifier, ticker);
        Ok(company.identifier.clone())
    }

    /// Performs one GET and returns the body, or `None` on a non-success
    /// status.
    async fn get_bytes(&self, url: &str, timeout: Duration) -> Result<Option<Vec<u8>>> {
        debug!("Fetching {}", url);
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, self.config.user_agent().to_string())
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| network_error(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "Request returned a non-success status");
            return Ok(None);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| network_error(url, &e))?;
        Ok(Some(body.to_vec()))
    }
}

#[async_trait]
impl CompanyFactsProvider for EdgarProvider {
    fn name(&self) -> &str {
        "SEC EDGAR"
    }

    async fn company_directory(&self) -> Result<Option<CompanyDirectory>> {
        let url = self.config.tickers_url();
        let Some(body) = self.get_bytes(url, self.config.tickers_timeout()).await? else {
            return Ok(None);
        };

        let tickers: IndexMap<String, CompanyTickerInfo> = serde_json::from_slice(&body)
            .map_err(|e| FactsError::Parse(format!("Failed to parse company tickers: {e}")))?;

        let directory = directory_from_tickers(tickers);
        debug!("Retrieved {} companies", directory.len());
        Ok(Some(directory))
    }

    async fn company_facts(&self, cik: &Cik) -> Result<Option<CompanyFacts>> {
        let url = self.company_facts_url(cik);
        let Some(body) = self.get_bytes(&url, self.config.facts_timeout()).await? else {
            return Ok(None);
        };

        let facts = CompanyFacts::from_slice(&body)?;
        debug!(
            cik = %cik,
            concepts = facts.concept_count(),
            "Parsed company facts"
        );
        Ok(Some(facts))
    }
}

fn network_error(url: &str, e: &reqwest::Error) -> FactsError {
    if e.is_timeout() {
        FactsError::Network(format!("Request to {url} timed out"))
    } else {
        FactsError::Network(e.to_string())
    }
}

/// Normalizes the SEC tickers list, keeping its order.
fn directory_from_tickers(tickers: IndexMap<String, CompanyTickerInfo>) -> CompanyDirectory {
    tickers
        .into_values()
        .map(|info| Company::new(info.title, &info.ticker, Cik::new(info.cik_str)))
        .collect()
}

// =============================================================================
// SEC API Response Types
// =============================================================================

/// Company ticker information from SEC JSON.
#[derive(Debug, Deserialize)]
struct CompanyTickerInfo {
    /// CIK as a number (SEC returns this as an integer)
    cik_str: u64,
    /// Ticker symbol
    ticker: String,
    /// Company name
    title: String,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config() -> EdgarConfig {
        EdgarConfig::new(UserAgent::new("Jane", "Doe", "jane@example.com").unwrap())
    }

    fn provider_for(server: &MockServer) -> EdgarProvider {
        let config = config()
            .with_base_url(server.uri())
            .with_tickers_url(format!("{}/files/company_tickers.json", server.uri()));
        EdgarProvider::new(config).unwrap()
    }

    fn tickers_body() -> serde_json::Value {
        json!({
            "0": {"cik_str": 320193, "ticker": "AAPL", "title": "Apple Inc."},
            "1": {"cik_str": 789019, "ticker": "MSFT", "title": "MICROSOFT CORP"},
            "2": {"cik_str": 1, "ticker": "AAPL", "title": "Shadow Listing"}
        })
    }

    #[test]
    fn test_provider_name() {
        let provider = EdgarProvider::new(config()).unwrap();
        assert_eq!(provider.name(), "SEC EDGAR");
    }

    #[test]
    fn test_company_facts_url() {
        let provider = EdgarProvider::new(config()).unwrap();
        assert_eq!(
            provider.company_facts_url(&Cik::new(320193)),
            "https://data.sec.gov/api/xbrl/companyfacts/CIK0000320193.json"
        );
    }

    #[test]
    fn test_directory_from_tickers() {
        let tickers: IndexMap<String, CompanyTickerInfo> =
            serde_json::from_value(tickers_body()).unwrap();
        let directory = directory_from_tickers(tickers);

        assert_eq!(directory.len(), 3);
        let first = directory.iter().next().unwrap();
        assert_eq!(first.ticker, "aapl");
        assert_eq!(first.name, "Apple Inc.");
        assert_eq!(first.identifier.as_str(), "0000320193");
        assert_eq!(directory.cik_for("AAPL"), Some(&Cik::new(320193)));
    }

    #[tokio::test]
    async fn test_company_directory_sends_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/files/company_tickers.json"))
            .and(header("user-agent", "Jane Doe (jane@example.com)"))
            .respond_with(ResponseTemplate::new(200).set_body_json(tickers_body()))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let directory = provider.company_directory().await.unwrap().unwrap();
        assert_eq!(directory.cik_for("msft"), Some(&Cik::new(789019)));
    }

    #[tokio::test]
    async fn test_get_cik_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/files/company_tickers.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(tickers_body()))
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        assert_eq!(provider.get_cik("aapl").await.unwrap(), Cik::new(320193));
        assert!(matches!(
            provider.get_cik("NOPE").await,
            Err(FactsError::NotFound(t)) if t == "NOPE"
        ));
        assert!(matches!(
            provider.get_cik("  ").await,
            Err(FactsError::InvalidParameter(_))
        ));
    }

    #[tokio::test]
    async fn test_company_facts_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/xbrl/companyfacts/CIK0000320193.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "cik": 320193,
                "entityName": "Apple Inc.",
                "facts": {"us-gaap": {"AssetsCurrent": {
                    "label": "Assets, Current",
                    "description": "Total current assets.",
                    "units": {"USD": [
                        {"end": "2023-09-30", "val": 143566000000_i64, "accn": "0000320193-23-000106",
                         "fy": 2023, "fp": "FY", "form": "10-K", "filed": "2023-11-03", "frame": "CY2023Q3I"}
                    ]}
                }}}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let facts = provider
            .company_facts(&Cik::new(320193))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(facts.entity_name(), Some("Apple Inc."));
        assert!(facts.concept("us-gaap", "AssetsCurrent").is_some());
    }

    #[tokio::test]
    async fn test_company_facts_non_success_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        assert!(provider.company_facts(&Cik::new(1)).await.unwrap().is_none());
        assert!(provider.company_directory().await.unwrap().is_none());
        assert!(matches!(
            provider.get_cik("aapl").await,
            Err(FactsError::NoData(_))
        ));
    }

    #[tokio::test]
    async fn test_company_facts_without_facts_section() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"cik": 1})))
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        assert!(matches!(
            provider.company_facts(&Cik::new(1)).await,
            Err(FactsError::MalformedDocument(_))
        ));
    }

    #[tokio::test]
    async fn test_company_facts_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"facts": {}}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let config = config()
            .with_base_url(server.uri())
            .with_facts_timeout(Duration::from_millis(50));
        let provider = EdgarProvider::new(config).unwrap();

        let err = provider.company_facts(&Cik::new(1)).await.unwrap_err();
        assert!(matches!(err, FactsError::Network(ref msg) if msg.contains("timed out")));
    }
}
