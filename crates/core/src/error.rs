use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// Two kinds cover the whole surface: converting between typed values
/// and the store's attribute representation, and failures reported by
/// the store itself. Store failures are propagated verbatim; the
/// repository never retries or reclassifies them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Store error: {0}")]
    Store(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
