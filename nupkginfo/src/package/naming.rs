//! Centralized package naming constants.
//!
//! This module is the single source of truth for the file extensions used
//! by the package format:
//! - Archive files (e.g., `Contoso.Utils.1.2.3.nupkg`)
//! - Embedded manifest files (e.g., `Contoso.Utils.nuspec`)
//!
//! Other modules should use these rather than spelling extensions inline.

/// File extension of a package archive, without the leading dot.
pub const ARCHIVE_EXTENSION: &str = "nupkg";

/// File extension of the manifest embedded in an archive, without the
/// leading dot.
pub const MANIFEST_EXTENSION: &str = "nuspec";

/// Generate the manifest filename for a package.
///
/// The manifest sits at the archive root and is named after the package.
///
/// # Examples
///
/// ```
/// use nupkginfo::package::manifest_filename;
///
/// assert_eq!(manifest_filename("Contoso.Utils"), "Contoso.Utils.nuspec");
/// ```
pub fn manifest_filename(package_name: &str) -> String {
    format!("{}.{}", package_name, MANIFEST_EXTENSION)
}
