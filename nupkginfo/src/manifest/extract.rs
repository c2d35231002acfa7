//! Zip archive extraction.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use tracing::debug;

use super::error::{ManifestError, ManifestResult};

/// Extract the full contents of a zip archive into `dest_dir`.
///
/// Existing files at the destination are overwritten. Entries whose names
/// would escape the destination (absolute paths, `..` components) are
/// skipped rather than written.
///
/// # Arguments
///
/// * `archive_path` - Path to the zip archive
/// * `dest_dir` - Directory to extract into (created if absent)
///
/// # Returns
///
/// The number of files written.
pub fn extract_archive(archive_path: &Path, dest_dir: &Path) -> ManifestResult<usize> {
    let file = File::open(archive_path).map_err(|e| ManifestError::ArchiveOpenFailed {
        path: archive_path.to_path_buf(),
        source: e,
    })?;

    let mut archive = zip::ZipArchive::new(file).map_err(|e| ManifestError::ArchiveInvalid {
        path: archive_path.to_path_buf(),
        reason: e.to_string(),
    })?;

    fs::create_dir_all(dest_dir).map_err(|e| ManifestError::ExtractionFailed {
        path: dest_dir.to_path_buf(),
        reason: format!("failed to create destination: {}", e),
    })?;

    let mut count = 0usize;
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| ManifestError::ArchiveInvalid {
                path: archive_path.to_path_buf(),
                reason: format!("failed to read entry {}: {}", i, e),
            })?;

        // Entries with absolute or parent-relative names would land
        // outside dest_dir.
        let entry_path = match entry.enclosed_name() {
            Some(p) => p,
            None => {
                debug!(entry = entry.name(), "skipping entry with unsafe path");
                continue;
            }
        };

        let output_path = dest_dir.join(entry_path);

        if entry.is_dir() {
            fs::create_dir_all(&output_path).map_err(|e| ManifestError::ExtractionFailed {
                path: output_path.clone(),
                reason: e.to_string(),
            })?;
        } else {
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent).map_err(|e| ManifestError::ExtractionFailed {
                    path: parent.to_path_buf(),
                    reason: e.to_string(),
                })?;
            }

            let mut output = File::create(&output_path).map_err(|e| {
                ManifestError::ExtractionFailed {
                    path: output_path.clone(),
                    reason: e.to_string(),
                }
            })?;

            io::copy(&mut entry, &mut output).map_err(|e| ManifestError::ExtractionFailed {
                path: output_path.clone(),
                reason: e.to_string(),
            })?;

            count += 1;
        }
    }

    debug!(
        files = count,
        dest = %dest_dir.display(),
        "archive extracted"
    );

    Ok(count)
}
