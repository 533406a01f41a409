//! # Error Log
//!
//! Append-only side file next to the catalog. One line per failure:
//!
//! ```text
//! [2025-03-01T10:15:30.123] INVALID LINE: "Dune:Herbert:12:3" - InvalidISBN: ISBN must be exactly 13 digits.
//! ```
//!
//! Entries are formatted completely before the file is touched and written
//! with a single `write_all` under the log mutex, so lines from concurrent
//! tasks never interleave.

use crate::error::{CatalogError, ErrorKind, Result, ValidationError};
use crate::init::catalog_dir;
use chrono::{DateTime, Local};
use parking_lot::Mutex;
use std::borrow::Cow;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_FILE: &str = "errors.log";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogCategory {
    InvalidLine,
    Operation,
    FileRead,
}

impl fmt::Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LogCategory::InvalidLine => "INVALID LINE",
            LogCategory::Operation => "OPERATION",
            LogCategory::FileRead => "FILE READ",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub category: LogCategory,
    pub raw_input: String,
    pub kind: ErrorKind,
    pub message: String,
}

impl LogEntry {
    pub fn new(category: LogCategory, raw_input: &str, error: &CatalogError) -> Self {
        Self::with_cause(category, raw_input, error.kind(), error.to_string())
    }

    pub fn invalid_line(raw_input: &str, error: &ValidationError) -> Self {
        Self::with_cause(
            LogCategory::InvalidLine,
            raw_input,
            error.kind(),
            error.to_string(),
        )
    }

    fn with_cause(category: LogCategory, raw_input: &str, kind: ErrorKind, message: String) -> Self {
        Self {
            timestamp: Local::now(),
            category,
            raw_input: raw_input.to_string(),
            kind,
            message,
        }
    }

    pub fn to_line(&self) -> String {
        format!(
            "[{}] {}: \"{}\" - {}: {}\n",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.category,
            escape_line_breaks(&self.raw_input),
            self.kind,
            self.message
        )
    }
}

/// Keeps one entry on one line.
fn escape_line_breaks(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['\n', '\r']) {
        return Cow::Borrowed(raw);
    }
    Cow::Owned(raw.replace('\r', "\\r").replace('\n', "\\n"))
}

pub struct ErrorLog {
    path: PathBuf,
    guard: Mutex<()>,
}

impl ErrorLog {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            guard: Mutex::new(()),
        }
    }

    /// Log file named `file_name` in the same directory as `catalog_path`.
    pub fn beside(catalog_path: &Path, file_name: &str) -> Self {
        Self::new(catalog_dir(catalog_path).join(file_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, entry: &LogEntry) -> Result<()> {
        let line = entry.to_line();

        let _held = self.guard.lock();
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use tempfile::TempDir;

    #[test]
    fn entry_line_matches_documented_format() {
        let err = ValidationError::InvalidIsbn("ISBN must be exactly 13 digits.".into());
        let entry = LogEntry::invalid_line("Dune:Herbert:12:3", &err);
        let line = entry.to_line();

        assert!(line.starts_with('['));
        assert!(line.ends_with(
            "] INVALID LINE: \"Dune:Herbert:12:3\" - InvalidISBN: ISBN must be exactly 13 digits.\n"
        ));
        let stamp = &line[1..line.find(']').unwrap()];
        assert!(chrono::NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn operation_entries_use_error_kind() {
        let err = CatalogError::DuplicateIsbn("9780441013593".into());
        let entry = LogEntry::new(LogCategory::Operation, "9780441013593", &err);
        assert!(entry
            .to_line()
            .contains("OPERATION: \"9780441013593\" - DuplicateISBN: Duplicate ISBN found"));
    }

    #[test]
    fn line_breaks_in_raw_input_stay_on_one_line() {
        let err = ValidationError::malformed("Invalid field count.");
        let entry = LogEntry::invalid_line("Dune\nHerbert\r:x", &err);
        let line = entry.to_line();

        assert_eq!(line.matches('\n').count(), 1);
        assert!(line.contains(r#""Dune\nHerbert\r:x""#));
    }

    #[test]
    fn beside_uses_catalog_directory() {
        let log = ErrorLog::beside(Path::new("data/books.txt"), DEFAULT_LOG_FILE);
        assert_eq!(log.path(), Path::new("data/errors.log"));
        let log = ErrorLog::beside(Path::new("books.txt"), DEFAULT_LOG_FILE);
        assert_eq!(log.path(), Path::new("./errors.log"));
    }

    #[test]
    fn concurrent_appends_produce_whole_lines() {
        let dir = TempDir::new().unwrap();
        let log = Arc::new(ErrorLog::new(dir.path().join("errors.log")));
        let err = ValidationError::malformed("Invalid field count.");

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let log = Arc::clone(&log);
                let err = err.clone();
                thread::spawn(move || {
                    for i in 0..50 {
                        let raw = format!("thread {} line {} {}", t, i, "x".repeat(200));
                        log.append(&LogEntry::invalid_line(&raw, &err)).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let content = fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 400);
        for line in lines {
            assert!(line.starts_with('['));
            assert!(line.ends_with("MalformedEntry: Invalid field count."));
        }
    }
}
