use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Registo inválido: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Registo não encontrado: {0}")]
    UnknownRecord(String),
}
