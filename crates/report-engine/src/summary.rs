//! Summary mode: one tabular row per record.

use chrono::NaiveDate;
use sig_types::{FilterCriteria, Record};

use crate::format::{format_conclusion, format_value};
use crate::header;
use crate::layout::{
    line_height_mm, wrap_text, FontStyle, LayoutBuilder, Page, HEADER_BLUE, ROW_GREY, WHITE,
};

const TABLE_LEFT: f64 = 10.0;
const COLUMN_WIDTHS: [f64; 7] = [40.0, 25.0, 35.0, 30.0, 25.0, 20.0, 15.0];
const COLUMN_HEADERS: [&str; 7] = [
    "Projeto",
    "Área",
    "Localização",
    "Assessor",
    "Valor",
    "Conclusão",
    "Estado",
];
const CELL_PAD: f64 = 3.0;
const HEAD_SIZE: f64 = 9.0;
const BODY_SIZE: f64 = 8.0;
/// Approximate ascent offset from a cell's top padding to the first
/// baseline, in mm.
const BASELINE_MM: f64 = 3.0;

pub fn build(records: &[&Record], criteria: &FilterCriteria, generated_on: NaiveDate) -> Vec<Page> {
    let mut lb = LayoutBuilder::new();
    header::render(&mut lb, criteria, records.len(), generated_on);
    draw_head_row(&mut lb);

    for (i, record) in records.iter().enumerate() {
        let pages_before = lb.page_count();
        lb.break_if_near_bottom();
        if lb.page_count() > pages_before {
            draw_head_row(&mut lb);
        }
        draw_row(&mut lb, &row_cells(record), i % 2 == 1);
    }

    lb.finish()
}

/// The seven cell strings for a record, in column order.
pub fn row_cells(record: &Record) -> [String; 7] {
    [
        record.title.clone(),
        record.area.clone(),
        format!("{} - {}", record.concelho, record.freguesia),
        record.assessor.clone(),
        format_value(record.value.as_deref()),
        format_conclusion(record.conclusion_date.as_deref()),
        record.status.label().to_string(),
    ]
}

fn column_x(index: usize) -> f64 {
    TABLE_LEFT + COLUMN_WIDTHS[..index].iter().sum::<f64>()
}

fn table_width() -> f64 {
    COLUMN_WIDTHS.iter().sum()
}

fn draw_head_row(lb: &mut LayoutBuilder) {
    let top = lb.cursor();
    let height = line_height_mm(HEAD_SIZE) + 2.0 * CELL_PAD;
    lb.rect(TABLE_LEFT, top, table_width(), height, HEADER_BLUE);
    for (i, head) in COLUMN_HEADERS.iter().enumerate() {
        lb.text_at(
            column_x(i) + CELL_PAD,
            top + CELL_PAD + BASELINE_MM,
            HEAD_SIZE,
            FontStyle::Bold,
            WHITE,
            *head,
        );
    }
    lb.advance(height);
}

fn draw_row(lb: &mut LayoutBuilder, cells: &[String; 7], shaded: bool) {
    let line_h = line_height_mm(BODY_SIZE);
    let wrapped: Vec<Vec<String>> = cells
        .iter()
        .enumerate()
        .map(|(i, cell)| wrap_text(cell, COLUMN_WIDTHS[i] - 2.0 * CELL_PAD, BODY_SIZE))
        .collect();
    let max_lines = wrapped.iter().map(Vec::len).max().unwrap_or(1);
    let height = max_lines as f64 * line_h + 2.0 * CELL_PAD;

    let top = lb.cursor();
    if shaded {
        lb.rect(TABLE_LEFT, top, table_width(), height, ROW_GREY);
    }
    for (i, lines) in wrapped.iter().enumerate() {
        for (j, line) in lines.iter().enumerate() {
            lb.text_at(
                column_x(i) + CELL_PAD,
                top + CELL_PAD + BASELINE_MM + j as f64 * line_h,
                BODY_SIZE,
                FontStyle::Regular,
                crate::layout::BLACK,
                line.clone(),
            );
        }
    }
    lb.advance(height);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sig_types::Status;

    fn record() -> Record {
        Record {
            id: "machico-1".into(),
            title: "Requalificação da rede viária regional - zona leste – PAMUS".into(),
            description: "Projeto de requalificação.".into(),
            area: "Infraestruturas".into(),
            concelho: "Machico".into(),
            freguesia: "Machico".into(),
            assessor: "Eng. Carlos Silva".into(),
            secretaria: "Secretaria Regional das Infraestruturas".into(),
            created_at: "2022-01-15".into(),
            updated_at: "2022-09-20".into(),
            status: Status::Ativo,
            value: Some("1.836.017,04 euros".into()),
            conclusion_date: Some("2022-09-01".into()),
            attachments: vec![],
            news: vec![],
        }
    }

    #[test]
    fn test_row_cells_formatting() {
        let cells = row_cells(&record());
        assert_eq!(cells[2], "Machico - Machico");
        assert_eq!(cells[4], "1.836.017,04 €");
        assert_eq!(cells[5], "01/09/2022");
        assert_eq!(cells[6], "Ativo");
    }

    #[test]
    fn test_row_cells_without_value_or_conclusion() {
        let mut r = record();
        r.value = None;
        r.conclusion_date = None;
        let cells = row_cells(&r);
        assert_eq!(cells[4], "N/A");
        assert_eq!(cells[5], "N/A");
    }

    #[test]
    fn test_build_emits_one_row_per_record() {
        let r = record();
        let records: Vec<&Record> = vec![&r, &r, &r];
        let pages = build(&records, &FilterCriteria::default(), date());
        let localizacao_cells = pages
            .iter()
            .flat_map(|p| &p.texts)
            .filter(|t| t.text == "Machico - Machico")
            .count();
        assert_eq!(localizacao_cells, 3);
    }

    #[test]
    fn test_rows_alternate_shading() {
        let r = record();
        let records: Vec<&Record> = vec![&r; 4];
        let pages = build(&records, &FilterCriteria::default(), date());
        let grey_rows = pages
            .iter()
            .flat_map(|p| &p.rects)
            .filter(|rect| rect.fill == ROW_GREY)
            .count();
        assert_eq!(grey_rows, 2);
    }

    #[test]
    fn test_long_listing_paginates_and_repeats_the_head_band() {
        let r = record();
        let records: Vec<&Record> = vec![&r; 40];
        let pages = build(&records, &FilterCriteria::default(), date());
        assert!(pages.len() > 1);
        for page in &pages {
            assert!(page.rects.iter().any(|rect| rect.fill == HEADER_BLUE));
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
    }
}
