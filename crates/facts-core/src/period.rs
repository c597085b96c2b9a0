//! Fiscal period designations.
//!
//! EDGAR tags every observation with a fiscal period (`fp`). The common
//! designations get their own [`FiscalPeriod`] variants; anything else is kept
//! verbatim in [`FiscalPeriod::Other`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Fiscal period an observation was reported for.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FiscalPeriod {
    /// First quarter.
    Q1,
    /// Second quarter.
    Q2,
    /// Third quarter.
    Q3,
    /// Fourth quarter.
    Q4,
    /// Full fiscal year.
    FY,
    /// Any other designation, kept as reported.
    Other(String),
}

impl FiscalPeriod {
    /// Returns the designation as it appears in EDGAR data.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Q1 => "Q1",
            Self::Q2 => "Q2",
            Self::Q3 => "Q3",
            Self::Q4 => "Q4",
            Self::FY => "FY",
            Self::Other(other) => other,
        }
    }

    /// Returns true for the full-year designation.
    #[must_use]
    pub const fn is_full_year(&self) -> bool {
        matches!(self, Self::FY)
    }

    /// Returns the quarter number (1-4) for quarterly designations.
    #[must_use]
    pub const fn quarter(&self) -> Option<u8> {
        match self {
            Self::Q1 => Some(1),
            Self::Q2 => Some(2),
            Self::Q3 => Some(3),
            Self::Q4 => Some(4),
            _ => None,
        }
    }
}

impl fmt::Display for FiscalPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FiscalPeriod {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Q1" => Self::Q1,
            "Q2" => Self::Q2,
            "Q3" => Self::Q3,
            "Q4" => Self::Q4,
            "FY" => Self::FY,
            other => Self::Other(other.to_string()),
        })
    }
}

impl From<&str> for FiscalPeriod {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(period) => period,
            Err(never) => match never {},
        }
    }
}

impl Serialize for FiscalPeriod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FiscalPeriod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from(raw.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_designations() {
        assert_eq!(FiscalPeriod::from("FY"), FiscalPeriod::FY);
        assert_eq!(FiscalPeriod::from("Q3"), FiscalPeriod::Q3);
        assert!(FiscalPeriod::FY.is_full_year());
        assert_eq!(FiscalPeriod::Q2.quarter(), Some(2));
        assert_eq!(FiscalPeriod::FY.quarter(), None);
    }

    #[test]
    fn test_unknown_designation_is_kept() {
        let period = FiscalPeriod::from("H1");
        assert_eq!(period, FiscalPeriod::Other("H1".to_string()));
        assert_eq!(period.to_string(), "H1");
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&FiscalPeriod::Q4).unwrap();
        assert_eq!(json, "\"Q4\"");

        let parsed: FiscalPeriod = serde_json::from_str("\"CY\"").unwrap();
        assert_eq!(parsed, FiscalPeriod::Other("CY".to_string()));
    }
}
