//! Stream sides and the sources they are read from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Command-line sentinel that selects standard input.
pub const STDIN_SENTINEL: &str = "-";

/// Which of the two compared streams a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Program output under judgement (file 1)
    Candidate,
    /// Reference output with the accepted values or intervals (file 2)
    Reference,
}

impl Side {
    /// 1-based file number as it appears in diagnostics.
    pub fn file_number(self) -> u8 {
        match self {
            Self::Candidate => 1,
            Self::Reference => 2,
        }
    }

    /// The opposite side.
    pub fn other(self) -> Self {
        match self {
            Self::Candidate => Self::Reference,
            Self::Reference => Self::Candidate,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file {}", self.file_number())
    }
}

/// Where a stream is read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "path")]
pub enum StreamSource {
    /// The process' standard input
    StandardInput,
    /// A named file
    File(PathBuf),
}

impl StreamSource {
    /// Interpret a command-line argument, mapping `-` to standard input.
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDIN_SENTINEL {
            Self::StandardInput
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Whether this source is standard input.
    pub fn is_stdin(&self) -> bool {
        matches!(self, Self::StandardInput)
    }

    /// The file path, if this source is a file.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::StandardInput => None,
            Self::File(path) => Some(path),
        }
    }
}

impl fmt::Display for StreamSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StandardInput => f.write_str(STDIN_SENTINEL),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
