//! Include/exclude decisions and language hints for discovered files.
//!
//! Classification looks only at the file name and extension; it never
//! touches the filesystem, so a rejected file is never opened.

use crate::config::SnapshotConfig;

/// Why a file was left out before reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Name is in `exclude_files`.
    FileName,
    /// Extension is in `binary_extensions`.
    BinaryExtension,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification<'a> {
    /// Read the file; fence it with this label (may be empty).
    Include { language: &'a str },
    Reject(Rejection),
}

/// Decide whether a file goes into the snapshot.
///
/// `extension` is compared case-insensitively; `file_name` exactly.
pub fn classify<'a>(
    config: &'a SnapshotConfig,
    file_name: &str,
    extension: &str,
) -> Classification<'a> {
    if config.exclude_files.contains(file_name) {
        return Classification::Reject(Rejection::FileName);
    }
    let ext = extension.to_lowercase();
    if config.binary_extensions.contains(&ext) {
        return Classification::Reject(Rejection::BinaryExtension);
    }
    Classification::Include {
        language: language_for(config, &ext),
    }
}

/// Fence label for an extension, or `""` for no hint.
pub fn language_for<'a>(config: &'a SnapshotConfig, extension: &str) -> &'a str {
    config
        .languages
        .get(&extension.to_lowercase())
        .map(String::as_str)
        .unwrap_or("")
}
