//! Error types for the estimation checker.
//!
//! Only two categories of failure abort a run before a verdict exists: usage
//! errors (bad arguments or configuration) and input errors (a stream cannot
//! be opened or read). Everything else found while scanning is a discrepancy
//! recorded in the diff report.

use crate::side::Side;
use std::path::PathBuf;

/// Top-level error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Invalid invocation or configuration
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// Failure to open or read one of the streams
    #[error(transparent)]
    Input(#[from] InputError),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable error code for structured output and logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Usage(_) => "USAGE_ERROR",
            Self::Input(InputError::LineTooLong { .. }) => "LINE_TOO_LONG",
            Self::Input(_) => "IO_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Process exit status for this error.
    ///
    /// A verdict, accepted or not, always exits with 0; only errors that stop
    /// the comparison before a verdict is formed are non-zero.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 2,
            Self::Input(_) | Self::Internal(_) => 1,
        }
    }
}

/// Usage errors, detected before any stream is processed
#[derive(Debug, thiserror::Error)]
pub enum UsageError {
    /// Fewer positional arguments than required
    #[error("not enough arguments given")]
    NotEnoughArguments,

    /// Both files were given as the standard input sentinel
    #[error("both files specified as standard input")]
    BothStandardInput,

    /// A numeric parameter is out of its domain
    #[error("incorrect {name} '{value}' specified: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: String,
        /// Offending value as given
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// Configuration sources could not be loaded or are inconsistent
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Input errors on the compared streams
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// A named file could not be opened
    #[error("cannot open '{}': {source}", path.display())]
    Open {
        /// File that failed to open
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Reading from an open stream failed
    #[error("error reading {side}: {source}")]
    Read {
        /// Stream being read
        side: Side,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A line exceeded the configured maximum length
    #[error("{side}, line {line} exceeds the maximum line length of {limit} bytes")]
    LineTooLong {
        /// Stream being read
        side: Side,
        /// 1-based line number
        line: usize,
        /// Configured limit in bytes
        limit: usize,
    },
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
