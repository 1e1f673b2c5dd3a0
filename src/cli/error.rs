//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        CliError::Application(ApplicationError::Domain(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Application(e) => match e {
                ApplicationError::Domain(DomainError::UnknownMember(_)) => {
                    crate::exitcode::NOUSER
                }
                ApplicationError::Domain(_) => crate::exitcode::DATAERR,
                ApplicationError::NoFamilyFile => crate::exitcode::USAGE,
                ApplicationError::Io { .. } => crate::exitcode::NOINPUT,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
            },
        }
    }
}
