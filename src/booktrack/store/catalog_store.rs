use super::backend::CatalogBackend;
use super::{parse_lines, AddResult, Catalog, DuplicatePolicy, RejectedLine};
use crate::error::{CatalogError, Result};
use crate::model::Book;
use parking_lot::{Mutex, MutexGuard, RwLock};
use tracing::debug;

/// Owner of the catalog sequence and its backing storage.
///
/// Shared across worker threads by reference (or `Arc`); all methods take
/// `&self`.
pub struct CatalogStore<B: CatalogBackend> {
    /// Held for the whole append, sort, rewrite, publish cycle.
    backend: Mutex<B>,
    current: RwLock<Catalog>,
    policy: DuplicatePolicy,
}

impl<B: CatalogBackend> CatalogStore<B> {
    /// Load whatever the backend holds and take ownership of it.
    ///
    /// Lines that fail validation are returned, not stored. The loaded order
    /// is kept as-is; sorting happens on the first add.
    pub fn open(backend: B) -> Result<(Self, Vec<RejectedLine>)> {
        let lines = backend.read_lines()?.unwrap_or_default();
        let (books, rejected) = parse_lines(lines);
        debug!(
            location = %backend.location(),
            loaded = books.len(),
            rejected = rejected.len(),
            "catalog opened"
        );

        let store = Self {
            backend: Mutex::new(backend),
            current: RwLock::new(Catalog::from(books)),
            policy: DuplicatePolicy::default(),
        };
        Ok((store, rejected))
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Consistent view of the catalog as of the last completed add.
    pub fn snapshot(&self) -> Catalog {
        self.current.read().clone()
    }

    pub fn len(&self) -> usize {
        self.current.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert `book`, keep the catalog sorted by title and rewrite storage.
    ///
    /// The new sequence is published only after the rewrite succeeded, so a
    /// failed write leaves both memory and storage at the previous state.
    pub fn add(&self, book: Book) -> Result<AddResult> {
        let mut backend = self.backend.lock();
        let current = self.snapshot();

        if self.policy == DuplicatePolicy::Reject && current.iter().any(|b| b.isbn() == book.isbn())
        {
            return Err(CatalogError::DuplicateIsbn(book.isbn().to_string()));
        }

        let mut next = Vec::with_capacity(current.len() + 1);
        next.extend_from_slice(current.books());
        next.push(book.clone());
        // Stable, so equal titles keep insertion order.
        next.sort_by_cached_key(Book::sort_key);

        let lines: Vec<String> = next.iter().map(Book::to_line).collect();
        backend.write_lines(&lines)?;

        let count = next.len();
        *self.current.write() = Catalog::from(next);
        debug!(isbn = book.isbn(), count, "book added");

        Ok(AddResult { book, count })
    }

    /// Exclusive access to the backend, blocking adds while held.
    pub fn backend(&self) -> MutexGuard<'_, B> {
        self.backend.lock()
    }
}
