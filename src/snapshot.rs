//! The snapshot pipeline: walk → classify → read → collect.
//!
//! Runs strictly sequentially on the calling thread. Per-file failures never
//! abort the run; each is turned into a [`SnapshotEvent`] handed to the
//! caller's observer and the walk moves on. The caller decides where the
//! events go (stdout in the binary, a `Vec` in tests).

use crate::classify::{Classification, classify};
use crate::config::SnapshotConfig;
use crate::excerpt::{Excerpt, ExcerptError, read_excerpt};
use crate::report::{ExcerptBlock, Snapshot};
use crate::walk::{CandidateFile, walk};
use std::fs;
use std::path::PathBuf;

/// Something the operator should hear about during a run.
#[derive(Debug)]
pub enum SnapshotEvent {
    /// A file passed classification but could not be read.
    Skipped {
        rel_path: String,
        error: ExcerptError,
    },
}

/// Walk `config.root` and collect an excerpt of every eligible file.
pub fn snapshot<F>(config: &SnapshotConfig, mut on_event: F) -> Snapshot
where
    F: FnMut(&SnapshotEvent),
{
    let output = OutputFile::resolve(config);
    let mut snapshot = Snapshot::new();

    for candidate in walk(config) {
        if output.is(&candidate) {
            continue;
        }
        let language = match classify(config, &candidate.file_name, &candidate.extension) {
            Classification::Include { language } => language,
            Classification::Reject(_) => continue,
        };
        match read_excerpt(&candidate.path, config.max_lines) {
            Ok(Excerpt::Text(text)) => snapshot.push(ExcerptBlock {
                rel_path: candidate.display_path(),
                language: language.to_string(),
                text,
            }),
            Ok(Excerpt::Empty) => {}
            Err(error) => on_event(&SnapshotEvent::Skipped {
                rel_path: candidate.display_path(),
                error,
            }),
        }
    }

    snapshot
}

/// The document being written, so a previous run's snapshot inside the
/// scanned tree is not scraped into the next one.
struct OutputFile {
    name: Option<String>,
    canonical: Option<PathBuf>,
}

impl OutputFile {
    fn resolve(config: &SnapshotConfig) -> Self {
        Self {
            name: config
                .output
                .file_name()
                .map(|n| n.to_string_lossy().to_string()),
            canonical: fs::canonicalize(&config.output).ok(),
        }
    }

    fn is(&self, candidate: &CandidateFile) -> bool {
        let (Some(name), Some(canonical)) = (&self.name, &self.canonical) else {
            return false;
        };
        // Only canonicalize when the name already matches.
        *name == candidate.file_name
            && fs::canonicalize(&candidate.path).is_ok_and(|p| p == *canonical)
    }
}
