//! Package manifest extraction and flattening.
//!
//! A `.nupkg` archive is a zip container holding a `<name>.nuspec` XML
//! manifest at its root. This module extracts the archive into a unique
//! temporary directory, parses the manifest, and flattens the children of
//! its metadata container into an ordered field map:
//!
//! ```text
//! archive.nupkg ──extract──► <tempdir>/ ──locate──► <name>.nuspec
//!                                                        │
//!                           ordered field map ◄──flatten─┘
//! ```
//!
//! The temporary directory is scoped to one call and removed when the call
//! returns, so concurrent invocations never share an extraction path.

mod error;
mod extract;
mod nuspec;

pub use error::{ManifestError, ManifestResult};
pub use extract::extract_archive;
pub use nuspec::{flatten_metadata, read_manifest};
