//! Package filename parsing at the version boundary.
//!
//! Parses paths of the form `<name>.<version>.nupkg`:
//!
//! - `Newtonsoft.Json.13.0.3.nupkg` (name `Newtonsoft.Json`, version `13.0.3`)
//! - `Contoso.Utils.1.2.3-beta.nupkg` (version keeps the pre-release tag)
//! - `C:\pkgs\Contoso.Utils.1.0.0.nupkg` (name keeps the directory prefix)
//!
//! The name portion may contain dots, so the version boundary is found by
//! scanning for the leftmost position from which the remainder of the path
//! is a run of at least three dot-separated numeric components (plus an
//! optional lowercase pre-release tag) followed by the `.nupkg` extension.

use regex::Regex;
use std::sync::OnceLock;

use super::naming::ARCHIVE_EXTENSION;

/// Parsed package filename split at the version boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageFilename {
    /// Name portion as written, including any directory components.
    pub name: String,
    /// Version portion, including any pre-release tag.
    pub version: String,
}

impl PackageFilename {
    /// Name reduced to its final path segment.
    ///
    /// Both `/` and `\` are treated as separators, so paths produced on
    /// either platform reduce the same way.
    ///
    /// # Examples
    ///
    /// ```
    /// use nupkginfo::package::parse_package_filename;
    ///
    /// let parsed = parse_package_filename(r"C:\pkgs\Contoso.Utils.1.0.0.nupkg").unwrap();
    /// assert_eq!(parsed.name, r"C:\pkgs\Contoso.Utils");
    /// assert_eq!(parsed.base_name(), "Contoso.Utils");
    /// ```
    pub fn base_name(&self) -> &str {
        self.name.rsplit(['/', '\\']).next().unwrap_or(&self.name)
    }
}

/// Error parsing a package filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilenameError {
    /// Path does not follow the `<name>.<version>.nupkg` naming convention.
    PatternMismatch(String),
}

impl std::fmt::Display for FilenameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilenameError::PatternMismatch(path) => write!(
                f,
                "'{}' does not match the expected package naming convention \
                 <name>.<major>.<minor>.<patch>[-tag].nupkg",
                path
            ),
        }
    }
}

impl std::error::Error for FilenameError {}

/// Get the package filename regex.
///
/// We capture:
/// - Group 1: name portion (everything before the version boundary)
/// - Group 2: version portion (numeric run plus optional pre-release tag)
fn package_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // Pattern breakdown:
        // (.*?)                  - name, lazy so the leftmost valid boundary wins
        // [0-9]+(?:\.[0-9]+){2,} - at least three numeric version components
        // (?:-[a-z]+)?           - optional lowercase pre-release tag
        // \.<ext>                - archive extension, case sensitive
        Regex::new(&format!(
            r"^(.*?)\.([0-9]+(?:\.[0-9]+){{2,}}(?:-[a-z]+)?)\.{}$",
            ARCHIVE_EXTENSION
        ))
        .unwrap()
    })
}

/// Parse a package path into its name and version portions.
///
/// # Arguments
///
/// * `path` - Package path or bare filename ending in `.nupkg`
///
/// # Returns
///
/// The split filename, or [`FilenameError::PatternMismatch`] when the path
/// has no version boundary (fewer than three numeric components, wrong
/// extension, or no name portion at all).
///
/// # Examples
///
/// ```
/// use nupkginfo::package::parse_package_filename;
///
/// let parsed = parse_package_filename("Newtonsoft.Json.13.0.3.nupkg").unwrap();
/// assert_eq!(parsed.name, "Newtonsoft.Json");
/// assert_eq!(parsed.version, "13.0.3");
///
/// let parsed = parse_package_filename("Contoso.Utils.1.2.3-beta.nupkg").unwrap();
/// assert_eq!(parsed.version, "1.2.3-beta");
/// ```
pub fn parse_package_filename(path: &str) -> Result<PackageFilename, FilenameError> {
    let captures = package_pattern()
        .captures(path)
        .ok_or_else(|| FilenameError::PatternMismatch(path.to_string()))?;

    Ok(PackageFilename {
        name: captures[1].to_string(),
        version: captures[2].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_name() {
        let parsed = parse_package_filename("Foo.1.2.3.nupkg").unwrap();
        assert_eq!(parsed.name, "Foo");
        assert_eq!(parsed.version, "1.2.3");
    }

    #[test]
    fn test_parse_dotted_name() {
        let parsed = parse_package_filename("Foo.Bar.1.2.3.nupkg").unwrap();
        assert_eq!(parsed.name, "Foo.Bar");
        assert_eq!(parsed.version, "1.2.3");
    }

    #[test]
    fn test_parse_four_component_version() {
        let parsed = parse_package_filename("Foo.1.2.3.4.nupkg").unwrap();
        assert_eq!(parsed.name, "Foo");
        assert_eq!(parsed.version, "1.2.3.4");
    }

    #[test]
    fn test_parse_prerelease_tag() {
        let parsed = parse_package_filename("Foo.1.2.3-beta.nupkg").unwrap();
        assert_eq!(parsed.name, "Foo");
        assert_eq!(parsed.version, "1.2.3-beta");
    }

    #[test]
    fn test_parse_numeric_name_segment() {
        // The leftmost valid boundary wins, so a numeric leading segment
        // becomes the name and the remaining run becomes the version.
        let parsed = parse_package_filename("1.2.3.4.nupkg").unwrap();
        assert_eq!(parsed.name, "1");
        assert_eq!(parsed.version, "2.3.4");
    }

    #[test]
    fn test_parse_name_containing_version_like_run() {
        // An earlier numeric run not adjacent to the extension stays in
        // the name portion.
        let parsed = parse_package_filename("Foo.1.2.3.Tools.4.5.6.nupkg").unwrap();
        assert_eq!(parsed.name, "Foo.1.2.3.Tools");
        assert_eq!(parsed.version, "4.5.6");
    }

    #[test]
    fn test_parse_windows_path() {
        let parsed = parse_package_filename(r"C:\pkgs\Foo.1.0.0.nupkg").unwrap();
        assert_eq!(parsed.name, r"C:\pkgs\Foo");
        assert_eq!(parsed.base_name(), "Foo");
        assert_eq!(parsed.version, "1.0.0");
    }

    #[test]
    fn test_parse_unix_path() {
        let parsed = parse_package_filename("/srv/feed/Foo.Bar.2.0.1.nupkg").unwrap();
        assert_eq!(parsed.name, "/srv/feed/Foo.Bar");
        assert_eq!(parsed.base_name(), "Foo.Bar");
        assert_eq!(parsed.version, "2.0.1");
    }

    #[test]
    fn test_base_name_without_separators() {
        let parsed = parse_package_filename("Foo.Bar.1.2.3.nupkg").unwrap();
        assert_eq!(parsed.base_name(), "Foo.Bar");
    }

    #[test]
    fn test_parse_two_components_is_error() {
        let result = parse_package_filename("Foo.1.2.nupkg");
        assert!(matches!(result, Err(FilenameError::PatternMismatch(_))));
    }

    #[test]
    fn test_parse_version_without_name_is_error() {
        // Three components but no name segment before the boundary.
        let result = parse_package_filename("1.2.3.nupkg");
        assert!(matches!(result, Err(FilenameError::PatternMismatch(_))));
    }

    #[test]
    fn test_parse_uppercase_tag_is_error() {
        // Pre-release tags are lowercase letters only.
        let result = parse_package_filename("Foo.1.2.3-BETA.nupkg");
        assert!(matches!(result, Err(FilenameError::PatternMismatch(_))));
    }

    #[test]
    fn test_parse_dotted_tag_is_error() {
        let result = parse_package_filename("Foo.1.2.3-beta.1.nupkg");
        assert!(matches!(result, Err(FilenameError::PatternMismatch(_))));
    }

    #[test]
    fn test_parse_wrong_extension_is_error() {
        let result = parse_package_filename("Foo.1.2.3.zip");
        assert!(matches!(result, Err(FilenameError::PatternMismatch(_))));
    }

    #[test]
    fn test_parse_uppercase_extension_is_error() {
        let result = parse_package_filename("Foo.1.2.3.NUPKG");
        assert!(matches!(result, Err(FilenameError::PatternMismatch(_))));
    }

    #[test]
    fn test_parse_empty_is_error() {
        let result = parse_package_filename("");
        assert!(matches!(result, Err(FilenameError::PatternMismatch(_))));
    }

    #[test]
    fn test_error_display_names_path() {
        let err = parse_package_filename("Foo.1.2.nupkg").unwrap_err();
        assert!(err.to_string().contains("Foo.1.2.nupkg"));
        assert!(err.to_string().contains("naming convention"));
    }

    #[test]
    fn test_parsed_filename_equality() {
        let a = parse_package_filename("Foo.1.2.3.nupkg").unwrap();
        let b = parse_package_filename("Foo.1.2.3.nupkg").unwrap();
        let c = parse_package_filename("Foo.1.2.4.nupkg").unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
