//! CLI-level errors (wraps engine errors)

use thiserror::Error;

use crate::errors::LabError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Lab(#[from] LabError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Lab(e) => match e {
                LabError::Config(_) | LabError::ConfigDir => crate::exitcode::CONFIG,
                LabError::Io(_) => crate::exitcode::IOERR,
                LabError::Toml(_) => crate::exitcode::SOFTWARE,
                _ => crate::exitcode::DATAERR,
            },
        }
    }
}
