//! Shared report header block.

use chrono::NaiveDate;
use sig_types::FilterCriteria;

use crate::layout::{FontStyle, LayoutBuilder, LINE_MM, MARGIN_LEFT_MM};

pub const SYSTEM_TITLE: &str = "Sistema de Informação Governamental";
pub const ORGANIZATION: &str = "Governo Regional da Madeira";

/// System title, organization, one line per active filter, result count and
/// generation date. Leaves the cursor where the report body starts.
pub fn render(
    lb: &mut LayoutBuilder,
    criteria: &FilterCriteria,
    result_count: usize,
    generated_on: NaiveDate,
) {
    lb.set_cursor(20.0);
    lb.text(MARGIN_LEFT_MM, 18.0, FontStyle::Bold, SYSTEM_TITLE);
    lb.set_cursor(30.0);
    lb.text(MARGIN_LEFT_MM, 14.0, FontStyle::Regular, ORGANIZATION);

    lb.set_cursor(45.0);
    lb.text(MARGIN_LEFT_MM, 12.0, FontStyle::Bold, "Filtros Aplicados:");
    lb.set_cursor(52.0);
    for (label, value) in criteria.active_filters() {
        lb.text(
            MARGIN_LEFT_MM,
            12.0,
            FontStyle::Regular,
            format!("{label}: {value}"),
        );
        lb.advance(LINE_MM);
    }

    lb.advance(10.0);
    lb.text(
        MARGIN_LEFT_MM,
        12.0,
        FontStyle::Bold,
        format!("Total de registos: {result_count}"),
    );
    lb.advance(LINE_MM);
    lb.text(
        MARGIN_LEFT_MM,
        12.0,
        FontStyle::Bold,
        format!("Data de geração: {}", generated_on.format("%d/%m/%Y")),
    );
    lb.advance(20.0 - LINE_MM);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lists_only_active_filters() {
        let criteria = FilterCriteria {
            year: "2022".into(),
            concelho: "Machico".into(),
            ..Default::default()
        };
        let mut lb = LayoutBuilder::new();
        render(
            &mut lb,
            &criteria,
            1,
            NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
        );
        let pages = lb.finish();
        let texts: Vec<&str> = pages[0].texts.iter().map(|t| t.text.as_str()).collect();

        assert!(texts.contains(&"Ano: 2022"));
        assert!(texts.contains(&"Concelho: Machico"));
        assert!(texts.contains(&"Total de registos: 1"));
        assert!(texts.contains(&"Data de geração: 10/05/2024"));
        assert!(!texts.iter().any(|t| t.starts_with("Freguesia:")));
        assert!(!texts.iter().any(|t| t.starts_with("Pesquisa:")));
    }
}
