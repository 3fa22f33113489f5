use thiserror::Error;

/// Errors raised by catalog operations.
///
/// Persistence variants are never returned to callers; the store logs them
/// and keeps running on its in-memory state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("signal not found: {0}")]
    NotFound(String),

    #[error("signal id already exists: {0}")]
    DuplicateId(String),

    #[error("take profit {index} is out of range (signal has {available} targets)")]
    InvalidShareIndex { index: usize, available: usize },

    #[error("Incorrect code. Please try again.")]
    AuthMismatch,

    #[error("invalid {field}: {value:?}")]
    InvalidInput { field: &'static str, value: String },

    #[error("could not save signals: {0}")]
    PersistenceWrite(String),

    #[error("could not parse stored signals: {0}")]
    PersistenceReadCorrupt(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
