//! Nuspec manifest location and flattening.
//!
//! A nuspec document has a fixed two-level shape: a root `package` element
//! whose first child is the `metadata` container, whose children are the
//! scalar descriptor fields:
//!
//! ```text
//! <package>
//!   <metadata>
//!     <id>Contoso.Utils</id>
//!     <version>1.2.3</version>
//!     ...
//!   </metadata>
//! </package>
//! ```
//!
//! Flattening turns the container's direct children into an ordered
//! `name -> text` map. Three children are structured sub-trees rather than
//! scalar fields and are always stripped from the result.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

use crate::package::manifest_filename;

use super::error::{ManifestError, ManifestResult};
use super::extract::extract_archive;

/// Keys always removed from the flattened manifest. These hold nested
/// element lists, not scalar values.
const EXCLUDED_FIELDS: [&str; 3] = ["dependencies", "packageTypes", "contentFiles"];

/// Read the manifest embedded in a package archive.
///
/// Extracts the archive into a fresh temporary directory, reads
/// `<package_name>.nuspec` from the extraction root, and flattens its
/// metadata fields. The temporary directory is unique to this call and is
/// removed when the function returns, on success and error alike.
///
/// # Arguments
///
/// * `archive_path` - Path to the package archive
/// * `package_name` - Package name the manifest is named after
///
/// # Returns
///
/// The flattened manifest fields in document order, with the excluded
/// keys removed.
pub fn read_manifest(
    archive_path: &Path,
    package_name: &str,
) -> ManifestResult<IndexMap<String, String>> {
    let temp_dir = tempfile::Builder::new()
        .prefix("nupkginfo-")
        .tempdir()
        .map_err(ManifestError::TempDirFailed)?;

    let extracted = extract_archive(archive_path, temp_dir.path())?;
    debug!(
        files = extracted,
        package = package_name,
        "package extracted for manifest scan"
    );

    let manifest_name = manifest_filename(package_name);
    let manifest_path = temp_dir.path().join(&manifest_name);

    if !manifest_path.is_file() {
        return Err(ManifestError::ManifestMissing {
            name: manifest_name,
        });
    }

    let content = fs::read_to_string(&manifest_path).map_err(|e| ManifestError::ReadFailed {
        path: manifest_path.clone(),
        source: e,
    })?;

    flatten_metadata(&content)
}

/// Flatten the first metadata container of a nuspec document.
///
/// The root element's first child element is taken as the metadata
/// container; each of its direct child elements becomes one entry, in
/// document order, mapping the child's local name to the concatenated
/// character data of its subtree. Comments, whitespace between elements
/// and any later siblings of the container are ignored. A repeated element
/// name keeps its first position but its last value.
///
/// # Errors
///
/// [`ManifestError::XmlMalformed`] when the document fails to parse, and
/// [`ManifestError::StructureMissing`] when the root element or its first
/// child element is absent.
pub fn flatten_metadata(xml: &str) -> ManifestResult<IndexMap<String, String>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut fields: IndexMap<String, String> = IndexMap::new();

    // Element depth: 1 = root, 2 = metadata container, 3 = field elements.
    let mut depth = 0usize;
    let mut saw_root = false;
    let mut saw_container = false;
    let mut field: Option<(String, String)> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                depth += 1;
                match depth {
                    1 => saw_root = true,
                    2 => saw_container = true,
                    3 => {
                        field = Some((local_name(e.local_name().as_ref()), String::new()));
                    }
                    // Nested markup inside a field; only its text matters.
                    _ => {}
                }
            }
            Ok(Event::Empty(e)) => match depth {
                // Self-closing root: no children at all.
                0 => {
                    saw_root = true;
                    break;
                }
                // Self-closing container: no fields.
                1 => {
                    if !saw_container {
                        saw_container = true;
                        break;
                    }
                }
                // Self-closing field element inside the container.
                2 => {
                    fields.insert(local_name(e.local_name().as_ref()), String::new());
                }
                _ => {}
            },
            Ok(Event::Text(t)) => {
                if let Some((_, value)) = field.as_mut() {
                    let text = t
                        .unescape()
                        .map_err(|e| ManifestError::XmlMalformed(e.to_string()))?;
                    value.push_str(&text);
                }
            }
            Ok(Event::CData(t)) => {
                if let Some((_, value)) = field.as_mut() {
                    value.push_str(&String::from_utf8_lossy(&t));
                }
            }
            Ok(Event::End(_)) => {
                depth = depth.saturating_sub(1);
                match depth {
                    // A field closed; record it. Last value wins for
                    // repeated names.
                    2 => {
                        if let Some((name, value)) = field.take() {
                            fields.insert(name, value);
                        }
                    }
                    // The container closed; later siblings are not read.
                    1 => break,
                    0 => break,
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(ManifestError::XmlMalformed(format!(
                    "{} at position {}",
                    e,
                    reader.buffer_position()
                )));
            }
        }
    }

    if !saw_root {
        return Err(ManifestError::StructureMissing(
            "document has no root element".to_string(),
        ));
    }
    if !saw_container {
        return Err(ManifestError::StructureMissing(
            "root element has no child elements".to_string(),
        ));
    }

    for key in EXCLUDED_FIELDS {
        fields.shift_remove(key);
    }

    Ok(fields)
}

fn local_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}
