//! Detailed mode: one full block per record.

use chrono::NaiveDate;
use sig_types::{format_pt_date, FilterCriteria, Record};

use crate::format::{format_conclusion, format_value};
use crate::header;
use crate::layout::{
    line_height_mm, wrap_text, FontStyle, LayoutBuilder, Page, MARGIN_LEFT_MM, MARGIN_RIGHT_MM,
};

const CONTENT_WIDTH: f64 = MARGIN_RIGHT_MM - MARGIN_LEFT_MM;
const TITLE_SIZE: f64 = 12.0;
const BODY_SIZE: f64 = 10.0;
const NEWS_META_SIZE: f64 = 9.0;
/// Indent for the bulleted details and news entries.
const INDENT_MM: f64 = 5.0;

pub const NEWS_HEADING: &str = "O que se disse";

pub fn build(records: &[&Record], criteria: &FilterCriteria, generated_on: NaiveDate) -> Vec<Page> {
    let mut lb = LayoutBuilder::new();
    header::render(&mut lb, criteria, records.len(), generated_on);

    for (i, record) in records.iter().enumerate() {
        // One break decision per record block.
        lb.break_if_near_bottom();
        draw_record(&mut lb, i + 1, record);
    }

    lb.finish()
}

fn draw_record(lb: &mut LayoutBuilder, number: usize, record: &Record) {
    paragraph(
        lb,
        MARGIN_LEFT_MM,
        CONTENT_WIDTH,
        TITLE_SIZE,
        FontStyle::Bold,
        &format!("{number}. {}", record.title),
    );
    lb.advance(2.0);

    paragraph(
        lb,
        MARGIN_LEFT_MM,
        CONTENT_WIDTH,
        BODY_SIZE,
        FontStyle::Regular,
        &record.description,
    );
    lb.advance(2.0);

    for detail in details(record) {
        paragraph(
            lb,
            MARGIN_LEFT_MM + INDENT_MM,
            CONTENT_WIDTH - INDENT_MM,
            BODY_SIZE,
            FontStyle::Regular,
            &detail,
        );
    }

    if !record.news.is_empty() {
        lb.advance(2.0);
        paragraph(
            lb,
            MARGIN_LEFT_MM,
            CONTENT_WIDTH,
            BODY_SIZE + 1.0,
            FontStyle::Bold,
            NEWS_HEADING,
        );
        for news in &record.news {
            paragraph(
                lb,
                MARGIN_LEFT_MM + INDENT_MM,
                CONTENT_WIDTH - INDENT_MM,
                BODY_SIZE,
                FontStyle::Bold,
                &news.title,
            );
            paragraph(
                lb,
                MARGIN_LEFT_MM + INDENT_MM,
                CONTENT_WIDTH - INDENT_MM,
                BODY_SIZE,
                FontStyle::Regular,
                &news.content,
            );
            if let Some(link) = &news.link {
                paragraph(
                    lb,
                    MARGIN_LEFT_MM + INDENT_MM,
                    CONTENT_WIDTH - INDENT_MM,
                    NEWS_META_SIZE,
                    FontStyle::Regular,
                    &format!("Ver notícia: {link}"),
                );
            }
            paragraph(
                lb,
                MARGIN_LEFT_MM + INDENT_MM,
                CONTENT_WIDTH - INDENT_MM,
                NEWS_META_SIZE,
                FontStyle::Regular,
                &format_pt_date(&news.date),
            );
            lb.advance(2.0);
        }
    }

    lb.advance(6.0);
}

/// The bulleted details list for a record.
pub fn details(record: &Record) -> Vec<String> {
    vec![
        format!("• Área: {}", record.area),
        format!("• Localização: {} - {}", record.concelho, record.freguesia),
        format!("• Assessor: {}", record.assessor),
        format!("• Valor: {}", format_value(record.value.as_deref())),
        format!(
            "• Conclusão: {}",
            format_conclusion(record.conclusion_date.as_deref())
        ),
    ]
}

/// Word-wrap a paragraph and advance the cursor past it.
fn paragraph(
    lb: &mut LayoutBuilder,
    x: f64,
    width: f64,
    size: f64,
    style: FontStyle,
    text: &str,
) {
    let line_h = line_height_mm(size);
    for line in wrap_text(text, width, size) {
        lb.advance(line_h);
        lb.text(x, size, style, line);
    }
}
