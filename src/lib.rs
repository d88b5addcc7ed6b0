//! # code-snapshot
//!
//! Walks a source tree and writes one markdown document holding the first
//! lines of every text file, each in a fenced block tagged with its
//! language. Handy for pasting a codebase overview into a review, an issue,
//! or a chat with a language model.
//!
//! # Pipeline
//!
//! ```text
//! walk      root/       →  CandidateFile*   (pruned, top-down, lazy)
//! classify  name + ext  →  include + language | reject
//! excerpt   path        →  first N lines, trimmed | empty | skip reason
//! report    blocks      →  code_snapshot.md
//! ```
//!
//! Every stage takes the same immutable [`config::SnapshotConfig`] by
//! reference, so tests swap in alternate exclusion sets without touching
//! global state. [`snapshot::snapshot`] composes the stages.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Exclusion sets, language map, limits; `code-snapshot.toml` loading |
//! | [`walk`] | Top-down directory walk with pruning of excluded directory names |
//! | [`classify`] | File-name and extension filtering, language hints |
//! | [`excerpt`] | Bounded UTF-8 read of a file's leading lines |
//! | [`report`] | Run accumulator and markdown rendering/writing |
//! | [`snapshot`] | The sequential pipeline tying the stages together |
//! | [`output`] | Console messages for the operator |
//!
//! # Design Decisions
//!
//! ## Prune, Don't Filter
//!
//! Excluded directories are dropped before the walk descends into them.
//! A `node_modules` with a hundred thousand entries costs one `readdir` of
//! its parent, and nothing under `.git` is ever opened.
//!
//! ## Failures Are Values
//!
//! An empty file, an undecodable file and an unreadable file are distinct
//! results of [`excerpt::read_excerpt`]. None of them stop the run; only a
//! failure to write the final document is reported as a failed run.
//!
//! ## Discovery Order
//!
//! Sections appear in the order the filesystem lists entries (files of a
//! directory before its subdirectories). Two runs over the same tree on the
//! same machine produce the same bytes; across machines, treat the
//! document as a set of sections.

pub mod classify;
pub mod config;
pub mod excerpt;
pub mod output;
pub mod report;
pub mod snapshot;
pub mod walk;

#[cfg(test)]
pub(crate) mod test_helpers;
