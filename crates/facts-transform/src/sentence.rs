//! Natural-language sentences for individual filings.
//!
//! Every sentence follows one fixed template:
//!
//! ```text
//! The reported '{tag}' in {fiscal_year} ({period}) filed in a {form} form on {date} was {value} {unit}.
//! ```
//!
//! The tag is humanized by splitting on upper-case characters, `FY` reads as
//! `Full Year`, and values get thousands separators. Rendering is pure, so the
//! same filing always yields the same sentence.

use chrono::NaiveDate;
use facts_core::{FactValue, FiscalPeriod, FlattenedFiling};

/// Display text for the full-year period.
pub const FULL_YEAR: &str = "Full Year";

/// Display text for a fiscal year or period EDGAR left `null`.
pub const UNKNOWN: &str = "unknown";

/// Inserts a space before every upper-case character and trims the ends.
///
/// Runs of capitals are split letter by letter, so `"EPS"` becomes
/// `"E P S"`.
#[must_use]
pub fn humanize_tag(tag: &str) -> String {
    let mut out = String::with_capacity(tag.len() + tag.len() / 4);
    for c in tag.chars() {
        if c.is_uppercase() {
            out.push(' ');
        }
        out.push(c);
    }
    out.trim().to_string()
}

/// Returns the display form of a fiscal period.
#[must_use]
pub fn normalize_period(period: &FiscalPeriod) -> &str {
    if period.is_full_year() {
        FULL_YEAR
    } else {
        period.as_str()
    }
}

/// Renders a value with `,` thousands separators.
#[must_use]
pub fn format_value(value: &FactValue) -> String {
    match *value {
        FactValue::Integer(v) => {
            let sign = if v < 0 { "-" } else { "" };
            format!("{sign}{}", group_thousands(&v.unsigned_abs().to_string()))
        }
        FactValue::Decimal(v) => {
            let sign = if v < 0.0 { "-" } else { "" };
            let digits = v.abs().to_string();
            match digits.split_once('.') {
                Some((whole, frac)) => format!("{sign}{}.{frac}", group_thousands(whole)),
                None => format!("{sign}{}.0", group_thousands(&digits)),
            }
        }
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Builds the sentence describing one filed observation of `tag`.
#[must_use]
pub fn make_fact(
    tag: &str,
    value: &FactValue,
    unit: &str,
    fiscal_year: Option<i32>,
    fiscal_period: Option<&FiscalPeriod>,
    form_type: &str,
    date_filed: NaiveDate,
) -> String {
    let year = fiscal_year.map_or_else(|| UNKNOWN.to_string(), |fy| fy.to_string());
    let period = fiscal_period.map_or(UNKNOWN, normalize_period);
    format!(
        "The reported '{}' in {year} ({period}) filed in a {form_type} form on {date_filed} was {} {unit}.",
        humanize_tag(tag),
        format_value(value),
    )
}

/// Builds the sentence for a flattened filing of `tag`.
#[must_use]
pub fn describe_filing(tag: &str, filing: &FlattenedFiling) -> String {
    make_fact(
        tag,
        &filing.value,
        &filing.unit,
        filing.fiscal_year,
        filing.fiscal_period.as_ref(),
        &filing.form_type,
        filing.date_filed,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_humanize_tag() {
        assert_eq!(humanize_tag("AssetsCurrent"), "Assets Current");
        assert_eq!(
            humanize_tag("NetCashProvidedByUsedInOperatingActivities"),
            "Net Cash Provided By Used In Operating Activities"
        );
        assert_eq!(humanize_tag("EPS"), "E P S");
        assert_eq!(humanize_tag("revenue"), "revenue");
        assert_eq!(humanize_tag(""), "");
    }

    #[test]
    fn test_normalize_period() {
        assert_eq!(normalize_period(&FiscalPeriod::FY), "Full Year");
        assert_eq!(normalize_period(&FiscalPeriod::Q2), "Q2");
        assert_eq!(normalize_period(&FiscalPeriod::from("H1")), "H1");
    }

    #[test]
    fn test_format_integer_values() {
        assert_eq!(format_value(&FactValue::Integer(1_234_567)), "1,234,567");
        assert_eq!(format_value(&FactValue::Integer(0)), "0");
        assert_eq!(format_value(&FactValue::Integer(-2500)), "-2,500");
        assert_eq!(format_value(&FactValue::Integer(999)), "999");
        assert_eq!(format_value(&FactValue::Integer(100_000)), "100,000");
        assert_eq!(
            format_value(&FactValue::Integer(i64::MIN)),
            "-9,223,372,036,854,775,808"
        );
    }

    #[test]
    fn test_format_decimal_values() {
        assert_eq!(format_value(&FactValue::Decimal(6.16)), "6.16");
        assert_eq!(format_value(&FactValue::Decimal(1234.5)), "1,234.5");
        assert_eq!(format_value(&FactValue::Decimal(-0.25)), "-0.25");
        assert_eq!(format_value(&FactValue::Decimal(2000.0)), "2,000.0");
    }

    #[test]
    fn test_make_fact_full_year() {
        let sentence = make_fact(
            "AssetsCurrent",
            &FactValue::Integer(5_000_000),
            "USD",
            Some(2023),
            Some(&FiscalPeriod::FY),
            "10-K",
            date(2024, 2, 1),
        );
        assert_eq!(
            sentence,
            "The reported 'Assets Current' in 2023 (Full Year) filed in a 10-K form on 2024-02-01 was 5,000,000 USD."
        );
    }

    #[test]
    fn test_make_fact_quarter_and_unknowns() {
        let quarter = make_fact(
            "Revenues",
            &FactValue::Integer(-2500),
            "USD",
            Some(2022),
            Some(&FiscalPeriod::Q3),
            "10-Q",
            date(2022, 10, 28),
        );
        assert_eq!(
            quarter,
            "The reported 'Revenues' in 2022 (Q3) filed in a 10-Q form on 2022-10-28 was -2,500 USD."
        );

        let unknown = make_fact(
            "EarningsPerShareBasic",
            &FactValue::Decimal(1.53),
            "USD/shares",
            None,
            None,
            "10-Q",
            date(2010, 4, 21),
        );
        assert_eq!(
            unknown,
            "The reported 'Earnings Per Share Basic' in unknown (unknown) filed in a 10-Q form on 2010-04-21 was 1.53 USD/shares."
        );
    }

    #[test]
    fn test_make_fact_is_deterministic() {
        let render = || {
            make_fact(
                "Liabilities",
                &FactValue::Integer(42),
                "USD",
                Some(2021),
                Some(&FiscalPeriod::Q1),
                "10-Q",
                date(2021, 5, 1),
            )
        };
        assert_eq!(render(), render());
    }

    #[test]
    fn test_describe_filing_matches_make_fact() {
        let filing = FlattenedFiling {
            unit: "shares".to_string(),
            value: FactValue::Integer(15_552_752_000),
            fiscal_year: Some(2023),
            fiscal_period: Some(FiscalPeriod::FY),
            form_type: "10-K".to_string(),
            date_filed: date(2023, 11, 3),
        };
        assert_eq!(
            describe_filing("EntityCommonStockSharesOutstanding", &filing),
            "The reported 'Entity Common Stock Shares Outstanding' in 2023 (Full Year) filed in a 10-K form on 2023-11-03 was 15,552,752,000 shares."
        );
    }
}
