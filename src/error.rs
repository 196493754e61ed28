//! Error types for diff-scaffold
//!
//! The failure taxonomy is small: every scaffold failure is a filesystem
//! operation that did not succeed, plus the drift outcome of `verify`.
//! The first failing operation aborts the run; nothing already written
//! is rolled back.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type alias for diff-scaffold operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for diff-scaffold
#[derive(Debug)]
pub enum Error {
    /// Scaffold target exists but is not a directory
    RootObstructed(PathBuf),
    /// Verify target does not exist
    RootMissing(PathBuf),
    /// Failed to create a directory
    DirCreate { path: PathBuf, source: io::Error },
    /// Failed to write a file
    FileWrite { path: PathBuf, source: io::Error },
    /// Failed to read a file back during verification
    FileRead { path: PathBuf, source: io::Error },
    /// Verification found drift from the manifest
    Drift { missing: usize, modified: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RootObstructed(path) => {
                write!(
                    f,
                    "{} already exists and is not a directory",
                    path.display()
                )
            }
            Error::RootMissing(path) => {
                write!(f, "Scaffold not found at {}", path.display())
            }
            Error::DirCreate { path, source } => {
                write!(f, "Failed to create directory {}: {}", path.display(), source)
            }
            Error::FileWrite { path, source } => {
                write!(f, "Failed to write {}: {}", path.display(), source)
            }
            Error::FileRead { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            Error::Drift { missing, modified } => {
                write!(
                    f,
                    "Scaffold drift detected: {} missing, {} modified",
                    missing, modified
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::DirCreate { source, .. }
            | Error::FileWrite { source, .. }
            | Error::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl Error {
    /// True when the failure means the target path must be moved or
    /// removed before the tool can do anything at all.
    pub fn is_obstruction(&self) -> bool {
        matches!(self, Error::RootObstructed(_))
    }
}
