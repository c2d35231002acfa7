//! Input path validation.
//!
//! Accepts paths that exist as given, plus one accommodation: a Unix-style
//! rendering of a Windows path (`/c/pkgs/Foo.1.0.0.nupkg`, as produced by
//! git-bash and MSYS shells) is rewritten to drive-letter form
//! (`c:/pkgs/Foo.1.0.0.nupkg`) and retried.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::CliError;

/// Verify that `path` names an existing file.
///
/// Returns the path that actually exists: the literal form when it does,
/// otherwise the drive-letter rewrite. Fails with the original path named
/// in the error when neither form exists.
pub fn validate_path(path: &str) -> Result<PathBuf, CliError> {
    if Path::new(path).is_file() {
        return Ok(PathBuf::from(path));
    }

    if let Some(rewritten) = rewrite_unix_style(path) {
        if rewritten.is_file() {
            debug!(
                original = path,
                rewritten = %rewritten.display(),
                "using drive-letter rewrite"
            );
            return Ok(rewritten);
        }
    }

    Err(CliError::PathNotFound(path.to_string()))
}

/// Rewrite `/c/foo` to `c:/foo`.
///
/// Returns `None` when the shape doesn't fit: no leading separator, or a
/// first segment that isn't a single drive letter.
fn rewrite_unix_style(path: &str) -> Option<PathBuf> {
    let mut chars = path.chars();
    if chars.next()? != '/' {
        return None;
    }
    let drive = chars.next()?;
    if !drive.is_ascii_alphabetic() || chars.next()? != '/' {
        return None;
    }
    Some(PathBuf::from(format!("{}:{}", drive, &path[2..])))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_existing_file_passes_through() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("Foo.1.2.3.nupkg");
        fs::write(&file, b"").unwrap();

        let path_str = file.to_string_lossy().into_owned();
        let validated = validate_path(&path_str).unwrap();
        assert_eq!(validated, file);
    }

    #[test]
    fn test_missing_file_names_original_path() {
        let err = validate_path("/nonexistent/Foo.1.2.3.nupkg").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/Foo.1.2.3.nupkg"));
    }

    #[test]
    fn test_directory_is_not_a_valid_path() {
        let temp = TempDir::new().unwrap();
        let path_str = temp.path().to_string_lossy().into_owned();
        assert!(validate_path(&path_str).is_err());
    }

    #[test]
    fn test_rewrite_drive_letter_shape() {
        assert_eq!(
            rewrite_unix_style("/c/pkgs/Foo.1.0.0.nupkg"),
            Some(PathBuf::from("c:/pkgs/Foo.1.0.0.nupkg"))
        );
        assert_eq!(
            rewrite_unix_style("/D/feed/Bar.2.0.0.nupkg"),
            Some(PathBuf::from("D:/feed/Bar.2.0.0.nupkg"))
        );
    }

    #[test]
    fn test_rewrite_rejects_other_shapes() {
        // Multi-character first segment is a plain Unix path.
        assert_eq!(rewrite_unix_style("/usr/local/Foo.1.0.0.nupkg"), None);
        // Relative paths have no leading separator.
        assert_eq!(rewrite_unix_style("pkgs/Foo.1.0.0.nupkg"), None);
        // A bare drive segment has nothing after it.
        assert_eq!(rewrite_unix_style("/c"), None);
        assert_eq!(rewrite_unix_style(""), None);
    }
}
