use std::fmt;
use std::path::PathBuf;

use crate::init::InitFamily;

/// Exit code used when init detection needs privileges we do not have.
pub const EXIT_PERMISSION_DENIED: i32 = 126;

/// Exit code used for malformed service/action lists.
pub const EXIT_USAGE: i32 = 127;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    PermissionDenied {
        path: PathBuf,
    },
    UsageError {
        message: String,
    },
    InvalidCommandLine {
        command: String,
    },
    ExecutionFailure {
        command: String,
        message: String,
    },
    UnsupportedInitFamily {
        family: InitFamily,
    },
}

impl Error {
    /// Process exit code the CLI should terminate with for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::PermissionDenied { .. } => EXIT_PERMISSION_DENIED,
            Error::UsageError { .. } => EXIT_USAGE,
            Error::InvalidCommandLine { .. }
            | Error::ExecutionFailure { .. }
            | Error::UnsupportedInitFamily { .. } => 1,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::PermissionDenied { path } => {
                write!(
                    f,
                    "permission denied reading '{}'\n  hint: must run as an elevated user (try sudo)",
                    path.to_string_lossy()
                )
            }
            Error::UsageError { message } => {
                write!(
                    f,
                    "{}\n  hint: arguments are pairs of 'service action', e.g. 'nginx reload'",
                    message
                )
            }
            Error::InvalidCommandLine { command } => {
                write!(
                    f,
                    "cannot tokenize command line '{}'\n  hint: check for unbalanced quotes or NUL bytes in the service or action name",
                    command
                )
            }
            Error::ExecutionFailure { command, message } => {
                write!(f, "failed to execute '{}': {}", command, message)
            }
            Error::UnsupportedInitFamily { family } => {
                write!(
                    f,
                    "no service backend for init family '{}'\n  hint: this is a bug; detection should have stopped earlier",
                    family
                )
            }
        }
    }
}

impl std::error::Error for Error {}
