//! Plain-text listing output.

use report_engine::format::{format_conclusion, format_value};
use sig_types::Record;

const HEADERS: [&str; 7] = [
    "Projeto",
    "Área",
    "Localização",
    "Assessor",
    "Valor",
    "Conclusão",
    "Estado",
];

fn row(record: &Record) -> [String; 7] {
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

/// Print the filtered records as an aligned table.
pub fn print_listing(records: &[&Record]) {
    let rows: Vec<[String; 7]> = records.iter().map(|r| row(r)).collect();

    let mut widths: [usize; 7] = HEADERS.map(|h| h.chars().count());
    for r in &rows {
        for (w, cell) in widths.iter_mut().zip(r.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    print_row(&HEADERS.map(String::from), &widths);
    println!("{}", "-".repeat(widths.iter().sum::<usize>() + widths.len() * 3));
    for r in &rows {
        print_row(r, &widths);
    }
}

fn print_row(cells: &[String; 7], widths: &[usize; 7]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{:<width$}", cell, width = w))
        .collect();
    println!("{}", line.join(" | "));
}
