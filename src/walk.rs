//! Top-down traversal with directory pruning.
//!
//! Walks the scan root with [`walkdir`] and yields every regular file as a
//! [`CandidateFile`]. Excluded directory names are pruned in `filter_entry`,
//! which runs *before* walkdir descends, so excluded subtrees are never
//! opened at all.
//!
//! ## Order
//!
//! Within each directory the entries are stably partitioned so files come
//! first and subdirectories second, each group keeping the order the
//! filesystem listed it in:
//!
//! ```text
//! root/b.py          ← files of root, in listing order
//! root/a.py
//! root/src/lib.rs    ← then each subdirectory, depth-first
//! root/docs/intro.md
//! ```
//!
//! Nothing is sorted by name, so the order differs between filesystems.
//!
//! ## Errors
//!
//! Unreadable directories (permission denied, removed mid-walk) are dropped
//! silently; their subtree is simply absent from the snapshot.

use crate::config::SnapshotConfig;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// A file discovered by the walk, not yet classified or opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// Path as reached from the scan root (root joined with the relative path).
    pub path: PathBuf,
    /// Path relative to the scan root.
    pub rel_path: PathBuf,
    /// Final path component.
    pub file_name: String,
    /// Text after the last dot of `file_name`; empty when there is none.
    pub extension: String,
}

impl CandidateFile {
    fn from_entry(entry: DirEntry, root: &Path) -> Self {
        let path = entry.into_path();
        let rel_path = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_string())
            .unwrap_or_default();
        Self {
            path,
            rel_path,
            file_name,
            extension,
        }
    }

    /// Relative path as it appears in the snapshot headings.
    pub fn display_path(&self) -> String {
        self.rel_path.to_string_lossy().to_string()
    }
}

/// Lazily walk `config.root`, yielding candidate files in discovery order.
///
/// Each call starts a fresh walk.
pub fn walk(config: &SnapshotConfig) -> impl Iterator<Item = CandidateFile> + '_ {
    let root = config.root.as_path();
    WalkDir::new(root)
        .follow_links(false)
        .sort_by(files_before_dirs)
        .into_iter()
        .filter_entry(move |entry| !is_pruned(entry, config))
        .filter_map(Result::ok)
        .filter(is_file_like)
        .map(move |entry| CandidateFile::from_entry(entry, root))
}

/// Stable partition: files first, then directories. Entries of the same
/// kind compare equal so their listing order is kept.
fn files_before_dirs(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type().is_dir().cmp(&b.file_type().is_dir())
}

/// The root itself is never pruned, whatever its name.
fn is_pruned(entry: &DirEntry, config: &SnapshotConfig) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && config.is_excluded_dir(&entry.file_name().to_string_lossy())
}

/// Regular files, plus symlinks that do not point at a directory.
/// Symlinked directories are neither yielded nor descended into. The root
/// entry is never a candidate, so a root that is itself a file yields nothing.
fn is_file_like(entry: &DirEntry) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    file_type.is_symlink() && !entry.path().is_dir()
}
