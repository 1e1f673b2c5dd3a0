//! Application-level errors (wraps domain errors)

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add loading/config context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("no family file given (use --file or set family_file in config)")]
    NoFamilyFile,

    #[error("{action}: {path}")]
    Io {
        action: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ApplicationError {
    /// Create an I/O error with the action and path that failed.
    pub fn io(action: impl Into<String>, path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            action: action.into(),
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
