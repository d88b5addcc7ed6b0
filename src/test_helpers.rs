//! Shared test utilities: fixture trees and snapshot lookups.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! write_tree(tmp.path(), &[("src/lib.rs", "pub fn f() {}")]);
//! let snapshot = snapshot(&config_for(tmp.path()), |_| {});
//! assert_eq!(find_block(&snapshot, "src/lib.rs").language, "rust");
//! ```

use std::fs;
use std::path::Path;

use crate::config::SnapshotConfig;
use crate::report::{ExcerptBlock, Snapshot};

// =========================================================================
// Fixture setup
// =========================================================================

/// Stock config scanning `root`.
pub fn config_for(root: &Path) -> SnapshotConfig {
    SnapshotConfig {
        root: root.to_path_buf(),
        ..SnapshotConfig::default()
    }
}

/// Create each `(relative path, contents)` under `root`, making parent
/// directories as needed.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (rel, contents) in files {
        write_bytes(root, rel, contents.as_bytes());
    }
}

/// Create one file with raw bytes under `root`.
pub fn write_bytes(root: &Path, rel: &str, bytes: &[u8]) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, bytes).unwrap();
}

// =========================================================================
// Snapshot lookups — panics with a clear message on miss
// =========================================================================

/// Find a block by relative path. Panics if not found.
pub fn find_block<'a>(snapshot: &'a Snapshot, rel_path: &str) -> &'a ExcerptBlock {
    snapshot
        .blocks
        .iter()
        .find(|b| b.rel_path == rel_path)
        .unwrap_or_else(|| {
            let paths = block_paths(snapshot);
            panic!("block '{rel_path}' not found. Available: {paths:?}")
        })
}

/// All block paths in snapshot order.
pub fn block_paths(snapshot: &Snapshot) -> Vec<&str> {
    snapshot.blocks.iter().map(|b| b.rel_path.as_str()).collect()
}
