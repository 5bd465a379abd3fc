use thiserror::Error;

/// Error taxonomy for domain services. Handlers translate variants into
/// HTTP statuses; store failures keep whatever context the repository
/// attached (including index hints for list queries).
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    #[error("duplicate value: {0}")]
    Duplicate(String),

    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

pub type DomainResult<T> = Result<T, DomainError>;
