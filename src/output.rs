//! Operator-facing console output.
//!
//! A run prints a start line, one line per file that could not be read,
//! and a closing summary (or the write failure):
//!
//! ```text
//! Starting codebase scrape... (Ignoring: .git, node_modules, venv)
//! Skipping binary file: assets/blob.dat
//! Skipping secrets/key.pem (Error: Permission denied (os error 13))
//!
//! ✅ Success! Scraped 42 files in 0.08 seconds.
//! Snapshot saved to: code_snapshot.md
//! ```
//!
//! Each message has a `format_*` function (pure, returns the lines) and a
//! `print_*` wrapper that writes them to stdout.

use crate::config::SnapshotConfig;
use crate::excerpt::ExcerptError;
use crate::report::ReportError;
use crate::snapshot::SnapshotEvent;
use std::path::Path;
use std::time::Duration;

pub fn format_start(config: &SnapshotConfig) -> String {
    let dirs: Vec<&str> = config.exclude_dirs.iter().map(String::as_str).collect();
    format!("Starting codebase scrape... (Ignoring: {})", dirs.join(", "))
}

pub fn format_event(event: &SnapshotEvent) -> String {
    match event {
        SnapshotEvent::Skipped {
            rel_path,
            error: ExcerptError::Undecodable(_),
        } => format!("Skipping binary file: {rel_path}"),
        SnapshotEvent::Skipped {
            rel_path,
            error: ExcerptError::Io(e),
        } => format!("Skipping {rel_path} (Error: {e})"),
    }
}

pub fn format_success(file_count: usize, elapsed: Duration, output: &Path) -> Vec<String> {
    vec![
        String::new(),
        format!(
            "✅ Success! Scraped {} files in {:.2} seconds.",
            file_count,
            elapsed.as_secs_f64()
        ),
        format!("Snapshot saved to: {}", output.display()),
    ]
}

pub fn format_write_error(err: &ReportError) -> String {
    format!("❌ Error writing to {}: {}", err.path.display(), err.source)
}

pub fn print_start(config: &SnapshotConfig) {
    println!("{}", format_start(config));
}

pub fn print_event(event: &SnapshotEvent) {
    println!("{}", format_event(event));
}

pub fn print_success(file_count: usize, elapsed: Duration, output: &Path) {
    for line in format_success(file_count, elapsed, output) {
        println!("{}", line);
    }
}

pub fn print_write_error(err: &ReportError) {
    println!("{}", format_write_error(err));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn start_lists_excluded_dirs() {
        let mut config = SnapshotConfig::default();
        config.exclude_dirs = ["venv", ".git"].iter().map(|s| s.to_string()).collect();
        assert_eq!(
            format_start(&config),
            "Starting codebase scrape... (Ignoring: .git, venv)"
        );
    }

    #[test]
    fn undecodable_skip_line() {
        let error = String::from_utf8(vec![0xff]).unwrap_err();
        let event = SnapshotEvent::Skipped {
            rel_path: "img/raw.dat".into(),
            error: ExcerptError::Undecodable(error),
        };
        assert_eq!(format_event(&event), "Skipping binary file: img/raw.dat");
    }

    #[test]
    fn io_skip_line_includes_reason() {
        let event = SnapshotEvent::Skipped {
            rel_path: "key.pem".into(),
            error: ExcerptError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "denied")),
        };
        assert_eq!(format_event(&event), "Skipping key.pem (Error: denied)");
    }

    #[test]
    fn success_summary() {
        let lines = format_success(3, Duration::from_millis(1234), Path::new("code_snapshot.md"));
        assert_eq!(
            lines,
            vec![
                "",
                "✅ Success! Scraped 3 files in 1.23 seconds.",
                "Snapshot saved to: code_snapshot.md",
            ]
        );
    }

    #[test]
    fn write_error_line() {
        let err = ReportError {
            path: PathBuf::from("out.md"),
            source: io::Error::new(io::ErrorKind::Other, "disk full"),
        };
        assert_eq!(format_write_error(&err), "❌ Error writing to out.md: disk full");
    }
}
