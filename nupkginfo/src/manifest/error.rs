//! Error types for manifest reading.

use std::io;
use std::path::PathBuf;

/// Result type for manifest operations.
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Errors that can occur while reading a package manifest.
#[derive(Debug)]
pub enum ManifestError {
    /// Failed to open the package archive.
    ArchiveOpenFailed { path: PathBuf, source: io::Error },

    /// Archive is not a readable zip container.
    ArchiveInvalid { path: PathBuf, reason: String },

    /// Failed to create the temporary extraction directory.
    TempDirFailed(io::Error),

    /// Failed to write extracted contents.
    ExtractionFailed { path: PathBuf, reason: String },

    /// Expected manifest file is absent from the extracted archive.
    ManifestMissing { name: String },

    /// Failed to read the extracted manifest file.
    ReadFailed { path: PathBuf, source: io::Error },

    /// Manifest is not well-formed XML.
    XmlMalformed(String),

    /// Manifest lacks the expected root/metadata structure.
    StructureMissing(String),
}

impl std::fmt::Display for ManifestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ArchiveOpenFailed { path, source } => {
                write!(f, "failed to open archive {}: {}", path.display(), source)
            }
            Self::ArchiveInvalid { path, reason } => {
                write!(f, "invalid zip archive {}: {}", path.display(), reason)
            }
            Self::TempDirFailed(source) => {
                write!(f, "failed to create temporary directory: {}", source)
            }
            Self::ExtractionFailed { path, reason } => {
                write!(f, "failed to extract to {}: {}", path.display(), reason)
            }
            Self::ManifestMissing { name } => {
                write!(f, "archive does not contain a manifest named {}", name)
            }
            Self::ReadFailed { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            Self::XmlMalformed(reason) => {
                write!(f, "manifest is not well-formed XML: {}", reason)
            }
            Self::StructureMissing(reason) => {
                write!(f, "manifest structure missing: {}", reason)
            }
        }
    }
}

impl std::error::Error for ManifestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ArchiveOpenFailed { source, .. } => Some(source),
            Self::TempDirFailed(source) => Some(source),
            Self::ReadFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}
