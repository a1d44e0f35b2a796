use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid column letter: {0:?}")]
    InvalidColumnLetter(String),
    #[error("invalid column index: {0}")]
    InvalidColumnIndex(String),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
