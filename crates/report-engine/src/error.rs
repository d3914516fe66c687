use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Falha ao gravar o PDF: {0}")]
    Write(String),
}
