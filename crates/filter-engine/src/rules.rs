//! Per-field filter rules.
//!
//! Each rule is an independent check: a field at its sentinel value imposes
//! no constraint. Text search is the only rule that case-folds; no rule
//! normalizes accents.

use sig_types::{record_year, FilterCriteria, Record};

/// Case-insensitive substring match over title or description only.
pub fn search(record: &Record, criteria: &FilterCriteria) -> bool {
    if !criteria.has_search() {
        return true;
    }
    let term = criteria.search.to_lowercase();
    record.title.to_lowercase().contains(&term)
        || record.description.to_lowercase().contains(&term)
}

/// The record's year (conclusion date, falling back to creation date) must
/// equal the filter year. A record whose candidate date does not parse
/// never matches an explicit year.
pub fn year(record: &Record, criteria: &FilterCriteria) -> bool {
    if !criteria.has_year() {
        return true;
    }
    record_year(record).as_deref() == Some(criteria.year.as_str())
}

pub fn concelho(record: &Record, criteria: &FilterCriteria) -> bool {
    !criteria.has_concelho() || record.concelho == criteria.concelho
}

pub fn freguesia(record: &Record, criteria: &FilterCriteria) -> bool {
    !criteria.has_freguesia() || record.freguesia == criteria.freguesia
}

pub fn area(record: &Record, criteria: &FilterCriteria) -> bool {
    !criteria.has_area() || record.area == criteria.area
}

/// Substring containment, not equality: tolerates secretaria-name variants
/// across the demo data.
pub fn secretaria(record: &Record, criteria: &FilterCriteria) -> bool {
    !criteria.has_secretaria() || record.secretaria.contains(&criteria.secretaria)
}
