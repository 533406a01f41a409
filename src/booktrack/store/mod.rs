//! # Storage Layer
//!
//! The catalog lives in two places at once: an ordered `Vec<Book>` in memory
//! and a plain text file on disk, one `Title:Author:ISBN:Copies` line per
//! book. [`CatalogStore`] owns both and is the only thing allowed to change
//! them.
//!
//! ## Backends
//!
//! Raw I/O sits behind the [`backend::CatalogBackend`] trait so the store logic
//! can be exercised without touching the filesystem:
//!
//! - [`fs_backend::FsBackend`]: production, one text file, atomic rewrites
//! - [`mem_backend::MemBackend`]: in-memory lines for tests
//!
//! ## Concurrency
//!
//! Any number of threads may share one `CatalogStore`. Writers are serialized
//! by the backend mutex: an add builds the next sorted sequence, rewrites the
//! backing file, and only then publishes the new sequence. Readers take
//! [`CatalogStore::snapshot`], which clones an `Arc` under a short read lock,
//! so they see either the catalog before an add or after it, never between.
//!
//! ## Duplicate ISBNs
//!
//! By default an add never looks at existing ISBNs; duplicates are only
//! detected when someone searches for that ISBN. [`DuplicatePolicy::Reject`]
//! turns on the stricter add-time check.

use self::backend::CatalogBackend;
use crate::error::{Result, ValidationError};
use crate::model::Book;
use crate::validate::validate;
use serde::Serialize;
use std::borrow::Cow;
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

pub mod backend;
pub mod catalog_store;
pub mod fs_backend;
pub mod mem_backend;

pub use catalog_store::CatalogStore;

/// Immutable point-in-time view of the catalog.
///
/// Cloning is cheap; the books are shared.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Arc<Vec<Book>>,
}

impl Catalog {
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Whether titles are in case-insensitive ascending order.
    pub fn is_sorted(&self) -> bool {
        self.books
            .windows(2)
            .all(|pair| pair[0].sort_key() <= pair[1].sort_key())
    }
}

impl From<Vec<Book>> for Catalog {
    fn from(books: Vec<Book>) -> Self {
        Self {
            books: Arc::new(books),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Whether an add may introduce an ISBN the catalog already holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Accept the add; a later ISBN search reports the conflict.
    #[default]
    Allow,
    /// Refuse the add with `DuplicateISBN`.
    Reject,
}

/// A line that failed validation while loading or ingesting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based position in the source file.
    pub line_number: usize,
    pub raw: String,
    pub error: ValidationError,
}

/// Result of a successful add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddResult {
    pub book: Book,
    /// Catalog size after the add.
    pub count: usize,
}

/// Validate every line, keeping file order for both accepted and rejected.
pub fn parse_lines<I, S>(lines: I) -> (Vec<Book>, Vec<RejectedLine>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut books = Vec::new();
    let mut rejected = Vec::new();

    for (idx, line) in lines.into_iter().enumerate() {
        let raw = line.as_ref();
        match validate(raw) {
            Ok(book) => books.push(book),
            Err(error) => rejected.push(RejectedLine {
                line_number: idx + 1,
                raw: raw.to_string(),
                error,
            }),
        }
    }

    (books, rejected)
}

/// Split raw file contents into lines.
///
/// Undecodable bytes become U+FFFD so one bad byte costs at most its own
/// record. Both `\n` and `\r\n` endings are accepted.
pub(crate) fn decode_lines(source: &Path, bytes: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(bytes);
    if matches!(text, Cow::Owned(_)) {
        warn!(file = %source.display(), "replaced invalid UTF-8 while reading");
    }
    text.lines().map(str::to_string).collect()
}

/// Read and validate the catalog file at `path`.
///
/// A missing file is an empty catalog. Invalid lines are returned alongside
/// the catalog instead of failing the load.
pub fn load<P: AsRef<Path>>(path: P) -> Result<(Catalog, Vec<RejectedLine>)> {
    let lines = fs_backend::FsBackend::new(path.as_ref())
        .read_lines()?
        .unwrap_or_default();
    let (books, rejected) = parse_lines(lines);
    Ok((Catalog::from(books), rejected))
}
