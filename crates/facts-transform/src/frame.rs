//! Tabular view of an output document.

use chrono::Datelike;
use facts_core::{FactsError, OutputDocument, Result};
use polars::prelude::*;

/// Days from 0001-01-01 to the Unix epoch, as counted by [`Datelike::num_days_from_ce`].
const EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Flattens every filing of `doc` into one row.
///
/// Columns: `tag, taxonomy, unit, value, fiscal_year, fiscal_period,
/// form_type, date_filed, fact`. Rows follow the document's tag order, then
/// each record's filing order.
///
/// # Errors
/// Returns [`FactsError::Export`] if the frame cannot be built.
pub fn filings_frame(doc: &OutputDocument) -> Result<DataFrame> {
    let rows = doc.filing_count();
    let mut tags: Vec<&str> = Vec::with_capacity(rows);
    let mut taxonomies: Vec<&str> = Vec::with_capacity(rows);
    let mut units: Vec<&str> = Vec::with_capacity(rows);
    let mut values: Vec<f64> = Vec::with_capacity(rows);
    let mut years: Vec<Option<i32>> = Vec::with_capacity(rows);
    let mut periods: Vec<Option<&str>> = Vec::with_capacity(rows);
    let mut forms: Vec<&str> = Vec::with_capacity(rows);
    let mut dates: Vec<i32> = Vec::with_capacity(rows);
    let mut facts: Vec<&str> = Vec::with_capacity(rows);

    for record in doc.records() {
        for (fact, filing) in record.entries() {
            tags.push(record.tag());
            taxonomies.push(record.taxonomy());
            units.push(&filing.unit);
            values.push(filing.value.as_f64());
            years.push(filing.fiscal_year);
            periods.push(filing.fiscal_period.as_ref().map(|p| p.as_str()));
            forms.push(&filing.form_type);
            dates.push(filing.date_filed.num_days_from_ce() - EPOCH_DAYS_FROM_CE);
            facts.push(fact);
        }
    }

    let date_col = Column::new("date_filed".into(), dates)
        .cast(&DataType::Date)
        .map_err(|e| FactsError::Export(e.to_string()))?;

    DataFrame::new(vec![
        Column::new("tag".into(), tags),
        Column::new("taxonomy".into(), taxonomies),
        Column::new("unit".into(), units),
        Column::new("value".into(), values),
        Column::new("fiscal_year".into(), years),
        Column::new("fiscal_period".into(), periods),
        Column::new("form_type".into(), forms),
        date_col,
        Column::new("fact".into(), facts),
    ])
    .map_err(|e| FactsError::Export(e.to_string()))
}
