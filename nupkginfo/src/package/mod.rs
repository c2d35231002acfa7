//! Package naming conventions and filename parsing.
//!
//! A distributable package is a zip archive whose filename encodes the
//! package name and version:
//!
//! ```text
//! Contoso.Utils.1.2.3.nupkg
//! └────┬──────┘ └─┬─┘
//!   name portion  version portion
//! ```
//!
//! The version portion is the trailing run of at least three dot-separated
//! numeric components, optionally followed by a `-<tag>` pre-release suffix,
//! immediately before the `.nupkg` extension. Everything before that
//! boundary is the name portion, which may itself contain dots and
//! directory components.

mod filename;
mod naming;

pub use filename::{parse_package_filename, FilenameError, PackageFilename};
pub use naming::{manifest_filename, ARCHIVE_EXTENSION, MANIFEST_EXTENSION};
