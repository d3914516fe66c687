use serde::{Deserialize, Serialize};

/// Sentinel meaning "any year".
pub const ALL_YEARS: &str = "all";
/// Sentinel meaning "any concelho".
pub const ALL_CONCELHOS: &str = "Todos os Concelhos";
/// Sentinel meaning "any freguesia".
pub const ALL_FREGUESIAS: &str = "all";
/// Sentinel meaning "any área".
pub const ALL_AREAS: &str = "Todas as Áreas";
/// Sentinel meaning "any secretaria".
pub const ALL_SECRETARIAS: &str = "Todas as Secretarias";

/// The filter set produced by the filter bar and the export options.
///
/// Every field carries its literal UI value; sentinels mark a field as
/// inactive. `Default` yields the all-sentinel ("match everything")
/// criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub year: String,
    pub concelho: String,
    pub freguesia: String,
    pub area: String,
    pub secretaria: String,
    pub search: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            year: ALL_YEARS.to_string(),
            concelho: ALL_CONCELHOS.to_string(),
            freguesia: ALL_FREGUESIAS.to_string(),
            area: ALL_AREAS.to_string(),
            secretaria: ALL_SECRETARIAS.to_string(),
            search: String::new(),
        }
    }
}

impl FilterCriteria {
    pub fn has_year(&self) -> bool {
        self.year != ALL_YEARS
    }

    pub fn has_concelho(&self) -> bool {
        self.concelho != ALL_CONCELHOS
    }

    pub fn has_freguesia(&self) -> bool {
        self.freguesia != ALL_FREGUESIAS
    }

    pub fn has_area(&self) -> bool {
        self.area != ALL_AREAS
    }

    pub fn has_secretaria(&self) -> bool {
        self.secretaria != ALL_SECRETARIAS
    }

    pub fn has_search(&self) -> bool {
        !self.search.is_empty()
    }

    /// True when every field is at its sentinel value.
    pub fn is_unfiltered(&self) -> bool {
        !(self.has_year()
            || self.has_concelho()
            || self.has_freguesia()
            || self.has_area()
            || self.has_secretaria()
            || self.has_search())
    }

    /// Active (non-sentinel) fields as `(label, display value)` pairs, in
    /// the order the report header lists them.
    pub fn active_filters(&self) -> Vec<(&'static str, String)> {
        let mut active = Vec::new();
        if self.has_year() {
            active.push(("Ano", self.year.clone()));
        }
        if self.has_concelho() {
            active.push(("Concelho", self.concelho.clone()));
        }
        if self.has_freguesia() {
            active.push(("Freguesia", self.freguesia.clone()));
        }
        if self.has_area() {
            active.push(("Área", self.area.clone()));
        }
        if self.has_secretaria() {
            active.push(("Secretaria", self.secretaria.clone()));
        }
        if self.has_search() {
            active.push(("Pesquisa", format!("\"{}\"", self.search)));
        }
        active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_unfiltered() {
        let criteria = FilterCriteria::default();
        assert!(criteria.is_unfiltered());
        assert!(criteria.active_filters().is_empty());
    }

    #[test]
    fn test_active_filters_order_and_quoting() {
        let criteria = FilterCriteria {
            year: "2022".into(),
            search: "saúde".into(),
            ..Default::default()
        };
        assert_eq!(
            criteria.active_filters(),
            vec![
                ("Ano", "2022".to_string()),
                ("Pesquisa", "\"saúde\"".to_string()),
            ]
        );
        assert!(!criteria.is_unfiltered());
    }
}
