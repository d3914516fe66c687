//! Report renderer
//!
//! Turns a filtered record sequence plus the criteria that produced it
//! into a downloadable PDF artifact. Two modes exist: a summary table and
//! a full detail listing. Rendering happens in two stages — a pure layout
//! pass producing positioned ops per page, then a writer pass encoding
//! them with lopdf — so pagination and content are testable without
//! parsing the output back.

pub mod detail;
pub mod error;
pub mod format;
pub mod header;
pub mod layout;
pub mod pdf;
pub mod summary;

use chrono::NaiveDate;
use sig_types::{FilterCriteria, Record};

pub use error::ReportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    Summary,
    Detailed,
}

/// A rendered artifact, ready to be written out under its deterministic
/// name.
#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Deterministic artifact name for a mode and generation date.
pub fn report_filename(mode: ReportMode, generated_on: NaiveDate) -> String {
    let date = generated_on.format("%Y-%m-%d");
    match mode {
        ReportMode::Summary => format!("relatorio-sig-{date}.pdf"),
        ReportMode::Detailed => format!("relatorio-sig-detalhado-{date}.pdf"),
    }
}

/// Render the filtered record sequence into a PDF report.
///
/// The caller passes the same filtered sequence the listing shows and the
/// criteria that produced it; the renderer does not validate record
/// completeness — the creation form guarantees the required fields exist.
pub fn generate_report(
    records: &[&Record],
    criteria: &FilterCriteria,
    mode: ReportMode,
    generated_on: NaiveDate,
) -> Result<RenderedReport, ReportError> {
    let pages = match mode {
        ReportMode::Summary => summary::build(records, criteria, generated_on),
        ReportMode::Detailed => detail::build(records, criteria, generated_on),
    };
    tracing::info!(
        registos = records.len(),
        paginas = pages.len(),
        modo = ?mode,
        "relatório gerado"
    );
    let bytes = pdf::write_document(&pages)?;
    Ok(RenderedReport {
        filename: report_filename(mode, generated_on),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filenames_are_deterministic_per_mode() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        assert_eq!(
            report_filename(ReportMode::Summary, date),
            "relatorio-sig-2024-05-10.pdf"
        );
        assert_eq!(
            report_filename(ReportMode::Detailed, date),
            "relatorio-sig-detalhado-2024-05-10.pdf"
        );
    }
}
