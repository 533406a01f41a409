use super::backend::CatalogBackend;
use crate::error::{CatalogError, Result};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// In-memory storage backend for testing.
///
/// Does NOT persist data. Keeps a count of rewrites so tests can check that
/// every add reached storage.
#[derive(Default)]
pub struct MemBackend {
    lines: Option<Vec<String>>,
    writes: AtomicUsize,
    simulate_write_error: AtomicBool,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that already holds a catalog file with these lines.
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: Some(lines.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }

    /// Lines as last written, `None` if never written or seeded.
    pub fn lines(&self) -> Option<&[String]> {
        self.lines.as_deref()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl CatalogBackend for MemBackend {
    fn read_lines(&self) -> Result<Option<Vec<String>>> {
        Ok(self.lines.clone())
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        if self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(CatalogError::Io(std::io::Error::other(
                "Simulated write error",
            )));
        }
        self.lines = Some(lines.to_vec());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// A well-formed catalog line for `title` with a deterministic ISBN.
    pub fn book_line(title: &str, n: u64) -> String {
        format!("{}:Test Author:{:013}:1", title, n)
    }

    pub struct BackendFixture {
        lines: Vec<String>,
    }

    impl Default for BackendFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BackendFixture {
        pub fn new() -> Self {
            Self { lines: Vec::new() }
        }

        pub fn with_books(mut self, count: usize) -> Self {
            let start = self.lines.len();
            for i in start..start + count {
                self.lines
                    .push(book_line(&format!("Test Book {}", i + 1), i as u64 + 1));
            }
            self
        }

        pub fn with_line(mut self, line: &str) -> Self {
            self.lines.push(line.to_string());
            self
        }

        pub fn build(self) -> MemBackend {
            MemBackend::with_lines(self.lines)
        }
    }
}
