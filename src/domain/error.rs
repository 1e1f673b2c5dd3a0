//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid names or family definitions.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown family member: {0}")]
    UnknownMember(String),

    #[error("family member already registered: {0}")]
    DuplicateMember(String),

    #[error("invalid family file: {message}")]
    InvalidFamilyFile { message: String },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
