//! Markdown snapshot document.
//!
//! A [`Snapshot`] collects [`ExcerptBlock`]s in the order the walk found
//! them and renders them as one markdown file:
//!
//! ````text
//! # Codebase Snapshot
//!
//! Scraped **2** files from the repository.
//!
//! ---
//!
//! ## src/main.rs
//! ```rust
//! fn main() {}
//! ```
//!
//! ## notes
//! ```
//! plain text, no language hint
//! ```
//! ````
//!
//! The header count is derived from the blocks, so it always equals the
//! number of sections.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("Error writing to {}: {source}", .path.display())]
pub struct ReportError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// One file's section in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcerptBlock {
    pub rel_path: String,
    /// Fence language; empty for an untagged fence.
    pub language: String,
    /// Trimmed excerpt text.
    pub text: String,
}

/// Everything gathered during one run, in discovery order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub blocks: Vec<ExcerptBlock>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: ExcerptBlock) {
        self.blocks.push(block);
    }

    /// Files that made it into the snapshot.
    pub fn file_count(&self) -> usize {
        self.blocks.len()
    }

    /// Render the whole document.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("# Codebase Snapshot\n\n");
        out.push_str(&format!(
            "Scraped **{}** files from the repository.\n\n",
            self.file_count()
        ));
        out.push_str("---\n\n");
        for block in &self.blocks {
            out.push_str(&render_block(block));
        }
        out
    }

    /// Write the rendered document to `path`, replacing whatever is there.
    ///
    /// The write is not atomic: a failure part-way can leave a truncated file.
    pub fn write_to(&self, path: &Path) -> Result<(), ReportError> {
        fs::write(path, self.render()).map_err(|source| ReportError {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn render_block(block: &ExcerptBlock) -> String {
    format!(
        "## {}\n```{}\n{}\n```\n\n",
        block.rel_path, block.language, block.text
    )
}
