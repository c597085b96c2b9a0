//! Company identifiers and the ticker reference list.
//!
//! - [`Cik`] - SEC Central Index Key, zero-padded to ten digits
//! - [`Company`] - One (name, ticker, identifier) triplet
//! - [`CompanyDirectory`] - Ordered reference list used to resolve tickers

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FactsError, Result};

/// Width of a zero-padded CIK.
pub const CIK_WIDTH: usize = 10;

/// SEC Central Index Key.
///
/// Always stored as a ten-digit, zero-padded numeric string, which is the
/// form the EDGAR API expects in URLs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cik(String);

impl Cik {
    /// Creates a CIK from its numeric value.
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(format!("{value:0>CIK_WIDTH$}"))
    }

    /// Parses a CIK from a string of at most ten ASCII digits, padding it.
    ///
    /// # Errors
    /// Returns [`FactsError::InvalidParameter`] if the string is empty, too
    /// long or contains anything but digits.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty()
            || trimmed.len() > CIK_WIDTH
            || !trimmed.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(FactsError::InvalidParameter(format!("invalid CIK: {s:?}")));
        }
        Ok(Self(format!("{trimmed:0>CIK_WIDTH$}")))
    }

    /// Returns the padded CIK as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cik {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Cik {
    type Error = FactsError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Cik> for String {
    fn from(cik: Cik) -> Self {
        cik.0
    }
}

/// A company filing with the SEC.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Registered company name.
    pub name: String,
    /// Lower-cased ticker symbol.
    pub ticker: String,
    /// The company's CIK.
    pub identifier: Cik,
}

impl Company {
    /// Creates a company entry, lower-casing the ticker.
    #[must_use]
    pub fn new(name: impl Into<String>, ticker: &str, identifier: Cik) -> Self {
        Self {
            name: name.into(),
            ticker: ticker.to_lowercase(),
            identifier,
        }
    }
}

/// Ordered list of companies used to resolve tickers to identifiers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyDirectory {
    companies: Vec<Company>,
}

impl CompanyDirectory {
    /// Creates a directory from companies in reference-list order.
    #[must_use]
    pub const fn new(companies: Vec<Company>) -> Self {
        Self { companies }
    }

    /// Finds the first company whose ticker matches `ticker`.
    ///
    /// The query is lower-cased before comparison; directory tickers are
    /// expected to be lower case already. Duplicate tickers are not detected,
    /// the first entry in list order wins.
    #[must_use]
    pub fn resolve(&self, ticker: &str) -> Option<&Company> {
        let needle = ticker.to_lowercase();
        self.companies.iter().find(|c| c.ticker == needle)
    }

    /// Returns the CIK for `ticker`, if present.
    #[must_use]
    pub fn cik_for(&self, ticker: &str) -> Option<&Cik> {
        self.resolve(ticker).map(|c| &c.identifier)
    }

    /// Returns the number of companies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.companies.len()
    }

    /// Returns true if the directory is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    /// Returns an iterator over the companies in list order.
    pub fn iter(&self) -> impl Iterator<Item = &Company> {
        self.companies.iter()
    }
}

impl FromIterator<Company> for CompanyDirectory {
    fn from_iter<I: IntoIterator<Item = Company>>(iter: I) -> Self {
        Self {
            companies: iter.into_iter().collect(),
        }
    }
}
