//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and the process exit policy.

use std::fmt;
use std::process;

use nupkginfo::manifest::ManifestError;
use nupkginfo::package::FilenameError;

use crate::args::ArgsError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Argument list could not be parsed.
    Args(ArgsError),
    /// Input path does not exist in literal or rewritten form.
    PathNotFound(String),
    /// Filename does not follow the package naming convention.
    Filename(FilenameError),
    /// Manifest could not be read from the archive.
    Manifest(ManifestError),
}

impl CliError {
    /// Exit the process with an error message and non-zero status.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Args(e) => write!(f, "{}", e),
            CliError::PathNotFound(path) => {
                write!(f, "{} not valid or in invalid format", path)
            }
            CliError::Filename(e) => write!(f, "{}", e),
            CliError::Manifest(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Args(e) => Some(e),
            CliError::Filename(e) => Some(e),
            CliError::Manifest(e) => Some(e),
            CliError::PathNotFound(_) => None,
        }
    }
}

impl From<ArgsError> for CliError {
    fn from(e: ArgsError) -> Self {
        CliError::Args(e)
    }
}

impl From<FilenameError> for CliError {
    fn from(e: FilenameError) -> Self {
        CliError::Filename(e)
    }
}

impl From<ManifestError> for CliError {
    fn from(e: ManifestError) -> Self {
        CliError::Manifest(e)
    }
}
