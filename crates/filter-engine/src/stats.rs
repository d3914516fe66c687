use std::collections::BTreeSet;

use sig_types::{taxonomy, Record};

/// Dashboard figures computed over the combined record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total_records: usize,
    /// Distinct assessor names.
    pub assessors: usize,
    /// Distinct canonical concelhos with at least one record, out of
    /// [`taxonomy::CONCELHOS`].
    pub concelhos_covered: usize,
}

impl Stats {
    pub fn compute<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        let mut total = 0;
        let mut assessors = BTreeSet::new();
        let mut concelhos = BTreeSet::new();
        for record in records {
            total += 1;
            assessors.insert(record.assessor.as_str());
            if taxonomy::CONCELHOS.contains(&record.concelho.as_str()) {
                concelhos.insert(record.concelho.as_str());
            }
        }
        Self {
            total_records: total,
            assessors: assessors.len(),
            concelhos_covered: concelhos.len(),
        }
    }
}
