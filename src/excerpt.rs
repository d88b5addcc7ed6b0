//! Bounded reads of a file's leading lines.
//!
//! [`read_excerpt`] stops after `max_lines` lines, so a multi-gigabyte log
//! costs no more than a short script. `\n`, `\r\n` and a lone `\r` all end a
//! line and all come out as `\n`. The bytes kept are decoded as UTF-8 in one
//! go; anything that is not valid UTF-8 is treated as binary content that
//! slipped past the extension check.
//!
//! Outcomes map one-to-one onto what the pipeline does with the file:
//!
//! | Result | Pipeline |
//! |--------|----------|
//! | `Ok(Excerpt::Text)` | appended to the snapshot |
//! | `Ok(Excerpt::Empty)` | dropped silently |
//! | `Err(ExcerptError::Undecodable)` | dropped, reported as binary |
//! | `Err(ExcerptError::Io)` | dropped, reported with the reason |

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Excerpt {
    /// Leading lines, line endings normalized and surrounding whitespace trimmed.
    /// May be empty if those lines were whitespace only.
    Text(String),
    /// The file has no lines at all.
    Empty,
}

#[derive(Error, Debug)]
pub enum ExcerptError {
    #[error("not valid UTF-8: {0}")]
    Undecodable(#[from] std::string::FromUtf8Error),
    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Read at most `max_lines` lines from `path`.
pub fn read_excerpt(path: &Path, max_lines: usize) -> Result<Excerpt, ExcerptError> {
    let file = File::open(path)?;
    read_lines(BufReader::new(file), max_lines)
}

fn read_lines<R: BufRead>(reader: R, max_lines: usize) -> Result<Excerpt, ExcerptError> {
    let mut buf = Vec::new();
    let mut lines = 0;
    // Set after a `\r`, so the `\n` of a `\r\n` pair is not a second line.
    let mut after_cr = false;
    let mut bytes = reader.bytes();
    while lines < max_lines {
        let Some(byte) = bytes.next() else {
            break;
        };
        match byte? {
            b'\n' if after_cr => after_cr = false,
            terminator @ (b'\r' | b'\n') => {
                buf.push(b'\n');
                lines += 1;
                after_cr = terminator == b'\r';
            }
            other => {
                buf.push(other);
                after_cr = false;
            }
        }
    }
    if buf.is_empty() {
        return Ok(Excerpt::Empty);
    }

    let text = String::from_utf8(buf)?;
    Ok(Excerpt::Text(text.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn numbered_lines(count: usize) -> String {
        (1..=count).map(|i| format!("line {i}\n")).collect()
    }

    #[test]
    fn short_file_read_whole() {
        let excerpt = read_lines(Cursor::new("a\nb\nc\n"), 75).unwrap();
        assert_eq!(excerpt, Excerpt::Text("a\nb\nc".into()));
    }

    #[test]
    fn long_file_truncated_to_max_lines() {
        let excerpt = read_lines(Cursor::new(numbered_lines(100)), 75).unwrap();
        let Excerpt::Text(text) = excerpt else {
            panic!("expected text");
        };
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 75);
        assert_eq!(lines[0], "line 1");
        assert_eq!(lines[74], "line 75");
    }

    #[test]
    fn exact_line_count_not_truncated() {
        let excerpt = read_lines(Cursor::new(numbered_lines(3)), 3).unwrap();
        assert_eq!(excerpt, Excerpt::Text("line 1\nline 2\nline 3".into()));
    }

    #[test]
    fn final_line_without_newline_counts() {
        let excerpt = read_lines(Cursor::new("one\ntwo"), 75).unwrap();
        assert_eq!(excerpt, Excerpt::Text("one\ntwo".into()));
    }

    #[test]
    fn surrounding_whitespace_trimmed() {
        let excerpt = read_lines(Cursor::new("\n\n   fn main() {}\n\n\t\n"), 75).unwrap();
        assert_eq!(excerpt, Excerpt::Text("fn main() {}".into()));
    }

    #[test]
    fn inner_indentation_kept() {
        let excerpt = read_lines(Cursor::new("  def f():\n      return 1\n"), 75).unwrap();
        assert_eq!(excerpt, Excerpt::Text("def f():\n      return 1".into()));
    }

    #[test]
    fn whitespace_only_lines_yield_empty_text() {
        let excerpt = read_lines(Cursor::new("\n  \n"), 75).unwrap();
        assert_eq!(excerpt, Excerpt::Text(String::new()));
    }

    #[test]
    fn crlf_normalized() {
        let excerpt = read_lines(Cursor::new("a\r\nb\r\n"), 75).unwrap();
        assert_eq!(excerpt, Excerpt::Text("a\nb".into()));
    }

    #[test]
    fn lone_cr_ends_a_line() {
        let input: String = (1..=100).map(|i| format!("l{i}\r")).collect();
        let excerpt = read_lines(Cursor::new(input), 75).unwrap();
        let Excerpt::Text(text) = excerpt else {
            panic!("expected text");
        };
        assert!(!text.contains('\r'));
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), 75);
        assert_eq!(lines[74], "l75");
    }

    #[test]
    fn mixed_line_endings_counted_once_each() {
        let excerpt = read_lines(Cursor::new("a\r\nb\rc\nd\r\ne\n"), 4).unwrap();
        assert_eq!(excerpt, Excerpt::Text("a\nb\nc\nd".into()));
    }

    #[test]
    fn blank_cr_lines_kept_inside() {
        let excerpt = read_lines(Cursor::new("a\r\rb\r"), 75).unwrap();
        assert_eq!(excerpt, Excerpt::Text("a\n\nb".into()));
    }

    #[test]
    fn empty_input_is_empty() {
        let excerpt = read_lines(Cursor::new(""), 75).unwrap();
        assert_eq!(excerpt, Excerpt::Empty);
    }

    #[test]
    fn invalid_utf8_is_undecodable() {
        let bytes: Vec<u8> = vec![0x89, b'P', b'N', b'G', 0xff, 0xfe, b'\n'];
        let result = read_lines(Cursor::new(bytes), 75);
        assert!(matches!(result, Err(ExcerptError::Undecodable(_))));
    }

    #[test]
    fn invalid_bytes_past_the_limit_are_not_read() {
        let mut bytes = b"ok\n".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
        let excerpt = read_lines(Cursor::new(bytes), 1).unwrap();
        assert_eq!(excerpt, Excerpt::Text("ok".into()));
    }

    #[test]
    fn read_excerpt_from_disk() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("a.py");
        fs::write(&path, numbered_lines(10)).unwrap();

        let excerpt = read_excerpt(&path, 2).unwrap();
        assert_eq!(excerpt, Excerpt::Text("line 1\nline 2".into()));
    }

    #[test]
    fn empty_file_on_disk_is_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("c.txt");
        fs::write(&path, "").unwrap();

        assert_eq!(read_excerpt(&path, 75).unwrap(), Excerpt::Empty);
    }

    #[test]
    fn missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = read_excerpt(&tmp.path().join("gone.txt"), 75);
        match result {
            Err(ExcerptError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn directory_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = read_excerpt(tmp.path(), 75);
        assert!(matches!(result, Err(ExcerptError::Io(_))));
    }
}
