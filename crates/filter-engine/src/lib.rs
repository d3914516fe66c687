//! Filter predicate and query engine
//!
//! Decides which records match a [`FilterCriteria`] and produces the
//! filtered, order-preserving sequence the listing and the report export
//! both consume. Filtering is a pure synchronous pass: same criteria, same
//! input, same output.

pub mod rules;
pub mod stats;

use sig_types::{FilterCriteria, Record};

pub use stats::Stats;

/// QueryEngine entry point
pub struct QueryEngine;

impl QueryEngine {
    pub fn new() -> Self {
        Self
    }

    /// True when the record passes every active filter field.
    pub fn matches(&self, record: &Record, criteria: &FilterCriteria) -> bool {
        rules::search(record, criteria)
            && rules::year(record, criteria)
            && rules::concelho(record, criteria)
            && rules::freguesia(record, criteria)
            && rules::area(record, criteria)
            && rules::secretaria(record, criteria)
    }

    /// Stable filter over the combined record set: relative order is
    /// preserved, nothing is re-sorted. An empty input yields an empty
    /// result; all-sentinel criteria yield the full set.
    pub fn apply<'a, I>(&self, records: I, criteria: &FilterCriteria) -> Vec<&'a Record>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let matched: Vec<&Record> = records
            .into_iter()
            .filter(|r| self.matches(r, criteria))
            .collect();
        tracing::debug!(matched = matched.len(), "filtro aplicado");
        matched
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use record_store::RecordStore;
    use sig_types::Status;

    fn engine() -> QueryEngine {
        QueryEngine::new()
    }

    fn record(title: &str, description: &str) -> Record {
        Record {
            id: "t-1".into(),
            title: title.into(),
            description: description.into(),
            area: "Infraestruturas".into(),
            concelho: "Machico".into(),
            freguesia: "Machico".into(),
            assessor: "Eng. Carlos Silva".into(),
            secretaria: "Secretaria Regional das Infraestruturas".into(),
            created_at: "2022-01-15".into(),
            updated_at: "2022-09-20".into(),
            status: Status::Ativo,
            value: None,
            conclusion_date: Some("2022-09-01".into()),
            attachments: vec![],
            news: vec![],
        }
    }

    #[test]
    fn test_all_sentinels_yield_full_set_in_order() {
        let store = RecordStore::new();
        let criteria = FilterCriteria::default();
        let result = engine().apply(store.all(), &criteria);
        let expected: Vec<String> = store.all().map(|r| r.id.clone()).collect();
        let got: Vec<String> = result.iter().map(|r| r.id.clone()).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_empty_set_yields_empty_result() {
        let criteria = FilterCriteria::default();
        assert!(engine().apply(std::iter::empty(), &criteria).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_description() {
        let r = record("Reabilitação do Cais", "Obras portuárias no cais de Machico.");
        let mut criteria = FilterCriteria {
            search: "CAIS".into(),
            ..Default::default()
        };
        assert!(engine().matches(&r, &criteria));

        criteria.search = "portuárias".into();
        assert!(engine().matches(&r, &criteria));

        // Other fields are not searched.
        criteria.search = "Carlos".into();
        assert!(!engine().matches(&r, &criteria));
    }

    #[test]
    fn test_year_uses_conclusion_date_then_created_at() {
        let mut r = record("t", "d");
        let criteria_2022 = FilterCriteria {
            year: "2022".into(),
            ..Default::default()
        };
        let criteria_2021 = FilterCriteria {
            year: "2021".into(),
            ..Default::default()
        };
        assert!(engine().matches(&r, &criteria_2022));
        assert!(!engine().matches(&r, &criteria_2021));

        // Without a conclusion date the creation year counts.
        r.conclusion_date = None;
        assert!(engine().matches(&r, &criteria_2022));
    }

    #[test]
    fn test_year_never_matches_malformed_dates() {
        let mut r = record("t", "d");
        r.conclusion_date = Some("por definir".into());
        let criteria = FilterCriteria {
            year: "2022".into(),
            ..Default::default()
        };
        assert!(!engine().matches(&r, &criteria));
    }

    #[test]
    fn test_concelho_freguesia_and_area_match_exactly() {
        let r = record("t", "d");
        let mut criteria = FilterCriteria {
            concelho: "Machico".into(),
            freguesia: "Machico".into(),
            area: "Infraestruturas".into(),
            ..Default::default()
        };
        assert!(engine().matches(&r, &criteria));

        criteria.area = "Infra".into();
        assert!(!engine().matches(&r, &criteria), "area is not a substring match");
    }

    #[test]
    fn test_secretaria_matches_by_substring() {
        let r = record("t", "d");
        let criteria = FilterCriteria {
            secretaria: "Infraestruturas".into(),
            ..Default::default()
        };
        assert!(engine().matches(&r, &criteria));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let store = RecordStore::new();
        let criteria = FilterCriteria {
            concelho: "Machico".into(),
            year: "2017".into(),
            ..Default::default()
        };
        let once: Vec<String> = engine()
            .apply(store.all(), &criteria)
            .iter()
            .map(|r| r.id.clone())
            .collect();
        let twice: Vec<String> = engine()
            .apply(store.all(), &criteria)
            .iter()
            .map(|r| r.id.clone())
            .collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_machico_2022_matches_exactly_the_pamus_record() {
        let store = RecordStore::new();
        let criteria = FilterCriteria {
            year: "2022".into(),
            concelho: "Machico".into(),
            ..Default::default()
        };
        let result = engine().apply(store.all(), &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(
            result[0].title,
            "Requalificação da rede viária regional - zona leste – PAMUS"
        );
    }

    #[test]
    fn test_search_saude_matches_health_records_only() {
        let store = RecordStore::new();
        let criteria = FilterCriteria {
            search: "saúde".into(),
            ..Default::default()
        };
        let result = engine().apply(store.all(), &criteria);
        assert!(result.iter().any(|r| r.id == "machico-6"));
        assert!(result.iter().all(|r| r.id != "machico-1"));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// A record whose secretaria equals the filter value always
            /// passes: containment is reflexive.
            #[test]
            fn secretaria_filter_accepts_exact_value(name in ".{1,40}") {
                let mut r = record("t", "d");
                r.secretaria = name.clone();
                let criteria = FilterCriteria { secretaria: name, ..Default::default() };
                prop_assert!(engine().matches(&r, &criteria));
            }

            /// Filtering returns a subsequence: every output record matches
            /// and output order follows input order.
            #[test]
            fn apply_returns_a_matching_subsequence(year in "20[0-2][0-9]") {
                let store = RecordStore::new();
                let criteria = FilterCriteria { year, ..Default::default() };
                let result = engine().apply(store.all(), &criteria);
                prop_assert!(result.iter().all(|r| engine().matches(r, &criteria)));

                let input_ids: Vec<&str> = store.all().map(|r| r.id.as_str()).collect();
                let mut last_pos = 0;
                for r in &result {
                    let pos = input_ids.iter().position(|id| *id == r.id).unwrap();
                    prop_assert!(pos >= last_pos);
                    last_pos = pos;
                }
            }
        }
    }
}
