//! pt-PT date helpers.
//!
//! Stored dates are `YYYY-MM-DD` strings. Malformed values are an accepted
//! data-quality limitation: the formatter echoes them verbatim and the year
//! derivation yields nothing, so they never match an explicit year filter.

use chrono::NaiveDate;

use crate::types::Record;

/// Format a stored `YYYY-MM-DD` date as `dd/mm/yyyy`. Unparseable input is
/// returned unchanged.
pub fn format_pt_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%d/%m/%Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// The calendar year a record counts under: the year of its conclusion
/// date when present, otherwise of its creation date.
pub fn record_year(record: &Record) -> Option<String> {
    let date = record.conclusion_date.as_deref().unwrap_or(&record.created_at);
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(|d| d.format("%Y").to_string())
}
