//! Configuration for the EDGAR provider.
//!
//! The SEC rejects anonymous traffic, so every request carries a `User-Agent`
//! naming a person and a contact address. [`UserAgent`] holds that identity
//! and [`EdgarConfig`] adds endpoints and timeouts.

use facts_core::{FactsError, Result};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// SEC EDGAR API base URL
pub const EDGAR_BASE_URL: &str = "https://data.sec.gov";

/// SEC company tickers URL
pub const COMPANY_TICKERS_URL: &str = "https://www.sec.gov/files/company_tickers.json";

/// Default timeout for a company facts request.
pub const DEFAULT_FACTS_TIMEOUT: Duration = Duration::from_secs(10);

/// Default timeout for the company tickers request.
pub const DEFAULT_TICKERS_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the requester's first name.
pub const ENV_FIRST_NAME: &str = "EDGAR_FIRST_NAME";
/// Environment variable holding the requester's last name.
pub const ENV_LAST_NAME: &str = "EDGAR_LAST_NAME";
/// Environment variable holding the requester's contact email.
pub const ENV_EMAIL: &str = "EDGAR_EMAIL";
/// Environment variable overriding the company facts timeout, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "EDGAR_TIMEOUT_SECS";

/// Identity sent to the SEC with every request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserAgent {
    first_name: String,
    last_name: String,
    email: String,
}

impl UserAgent {
    /// Creates an identity from a person's name and contact email.
    ///
    /// # Errors
    /// Returns [`FactsError::Config`] if a name is blank or the email has no
    /// `@`.
    pub fn new(first_name: &str, last_name: &str, email: &str) -> Result<Self> {
        let first_name = first_name.trim();
        let last_name = last_name.trim();
        let email = email.trim();

        if first_name.is_empty() || last_name.is_empty() {
            return Err(FactsError::Config(
                "user agent needs a first and last name".to_string(),
            ));
        }
        if !email.contains('@') {
            return Err(FactsError::Config(format!(
                "user agent email {email:?} is not an address"
            )));
        }

        Ok(Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
        })
    }

    /// Returns the contact email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.first_name, self.last_name, self.email)
    }
}

/// Settings for [`EdgarProvider`](crate::EdgarProvider).
#[derive(Clone, Debug)]
pub struct EdgarConfig {
    user_agent: UserAgent,
    base_url: String,
    tickers_url: String,
    facts_timeout: Duration,
    tickers_timeout: Duration,
}

impl EdgarConfig {
    /// Creates a configuration for the public SEC endpoints.
    #[must_use]
    pub fn new(user_agent: UserAgent) -> Self {
        Self {
            user_agent,
            base_url: EDGAR_BASE_URL.to_string(),
            tickers_url: COMPANY_TICKERS_URL.to_string(),
            facts_timeout: DEFAULT_FACTS_TIMEOUT,
            tickers_timeout: DEFAULT_TICKERS_TIMEOUT,
        }
    }

    /// Loads the configuration from `EDGAR_*` environment variables.
    ///
    /// # Errors
    /// Returns [`FactsError::Config`] if the identity variables are missing
    /// or the timeout is not a whole number of seconds.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| FactsError::Config(format!("{key} is not set")))
        };

        let user_agent = UserAgent::new(
            &required(ENV_FIRST_NAME)?,
            &required(ENV_LAST_NAME)?,
            &required(ENV_EMAIL)?,
        )?;

        let mut config = Self::new(user_agent);
        if let Some(secs) = parse_var::<u64>(&lookup, ENV_TIMEOUT_SECS)? {
            config = config.with_facts_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Overrides the company tickers URL.
    #[must_use]
    pub fn with_tickers_url(mut self, tickers_url: impl Into<String>) -> Self {
        self.tickers_url = tickers_url.into();
        self
    }

    /// Sets the company facts request timeout.
    #[must_use]
    pub const fn with_facts_timeout(mut self, timeout: Duration) -> Self {
        self.facts_timeout = timeout;
        self
    }

    /// Sets the company tickers request timeout.
    #[must_use]
    pub const fn with_tickers_timeout(mut self, timeout: Duration) -> Self {
        self.tickers_timeout = timeout;
        self
    }

    /// Returns the request identity.
    #[must_use]
    pub const fn user_agent(&self) -> &UserAgent {
        &self.user_agent
    }

    /// Returns the API base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the company tickers URL.
    #[must_use]
    pub fn tickers_url(&self) -> &str {
        &self.tickers_url
    }

    /// Returns the company facts request timeout.
    #[must_use]
    pub const fn facts_timeout(&self) -> Duration {
        self.facts_timeout
    }

    /// Returns the company tickers request timeout.
    #[must_use]
    pub const fn tickers_timeout(&self) -> Duration {
        self.tickers_timeout
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| FactsError::Config(format!("{key}={raw:?}: {e}"))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_user_agent_header() {
        let ua = UserAgent::new("Jane", "Doe", "jane@example.com").unwrap();
        assert_eq!(ua.to_string(), "Jane Doe (jane@example.com)");
        assert_eq!(ua.email(), "jane@example.com");
    }

    #[test]
    fn test_user_agent_validation() {
        assert!(UserAgent::new("", "Doe", "jane@example.com").is_err());
        assert!(UserAgent::new("Jane", "Doe", "not-an-email").is_err());
    }

    #[test]
    fn test_defaults() {
        let config = EdgarConfig::new(UserAgent::new("Jane", "Doe", "jane@example.com").unwrap());
        assert_eq!(config.base_url(), EDGAR_BASE_URL);
        assert_eq!(config.tickers_url(), COMPANY_TICKERS_URL);
        assert_eq!(config.facts_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let config = EdgarConfig::new(UserAgent::new("Jane", "Doe", "jane@example.com").unwrap())
            .with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_from_lookup() {
        let config = EdgarConfig::from_lookup(lookup(&[
            (ENV_FIRST_NAME, "Jane"),
            (ENV_LAST_NAME, "Doe"),
            (ENV_EMAIL, "jane@example.com"),
            (ENV_TIMEOUT_SECS, "25"),
        ]))
        .unwrap();
        assert_eq!(config.user_agent().to_string(), "Jane Doe (jane@example.com)");
        assert_eq!(config.facts_timeout(), Duration::from_secs(25));
    }

    #[test]
    fn test_from_lookup_missing_identity() {
        let err = EdgarConfig::from_lookup(lookup(&[(ENV_FIRST_NAME, "Jane")])).unwrap_err();
        assert!(err.to_string().contains(ENV_LAST_NAME));
    }

    #[test]
    fn test_from_lookup_bad_timeout() {
        let err = EdgarConfig::from_lookup(lookup(&[
            (ENV_FIRST_NAME, "Jane"),
            (ENV_LAST_NAME, "Doe"),
            (ENV_EMAIL, "jane@example.com"),
            (ENV_TIMEOUT_SECS, "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, FactsError::Config(_)));
    }
}
